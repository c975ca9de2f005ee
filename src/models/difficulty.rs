use serde::{Deserialize, Serialize};

/// Caller-supplied difficulty selector for generated questions.
///
/// The two endpoints accept disjoint subsets: the single-question endpoint
/// accepts `School` and `College`, the five-question quiz endpoint accepts
/// `Easy`, `Normal`, and `Hard`. Parsing alone is not acceptance — the
/// endpoint's preset checks membership in its accepted set separately.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    School,
    College,
}

impl Difficulty {
    /// Parse a wire value (`"easy"`, `"college"`, ...).
    ///
    /// Matching is exact and case-sensitive; anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            "school" => Some(Difficulty::School),
            "college" => Some(Difficulty::College),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::School => write!(f, "school"),
            Difficulty::College => write!(f, "college"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_values() {
        assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("normal"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("school"), Some(Difficulty::School));
        assert_eq!(Difficulty::parse("college"), Some(Difficulty::College));
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert_eq!(Difficulty::parse("impossible"), None);
        assert_eq!(Difficulty::parse(""), None);
        assert_eq!(Difficulty::parse("Easy"), None, "matching is case-sensitive");
        assert_eq!(Difficulty::parse(" easy"), None);
    }

    #[test]
    fn test_display_matches_wire_form() {
        for value in ["easy", "normal", "hard", "school", "college"] {
            let parsed = Difficulty::parse(value).unwrap();
            assert_eq!(parsed.to_string(), value);
        }
    }
}
