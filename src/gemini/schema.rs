//! Response-schema descriptors sent to the generateContent endpoint.
//!
//! The API's schema language uses uppercase type tags (`OBJECT`, `ARRAY`,
//! `STRING`) rather than JSON-Schema keywords.

use serde_json::{json, Value};

/// Schema for one question object with its three required fields.
pub fn question_object() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "question": { "type": "STRING" },
            "options": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "correctAnswer": { "type": "STRING" }
        },
        "required": ["question", "options", "correctAnswer"]
    })
}

/// Schema for an array of question objects.
///
/// The expected array length is carried by the prompt text, not the schema.
pub fn question_array() -> Value {
    json!({
        "type": "ARRAY",
        "items": question_object()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_schema_requires_all_fields() {
        let schema = question_object();
        assert_eq!(schema["type"], "OBJECT");
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["question", "options", "correctAnswer"]);
        assert_eq!(schema["properties"]["options"]["type"], "ARRAY");
        assert_eq!(schema["properties"]["options"]["items"]["type"], "STRING");
    }

    #[test]
    fn test_array_schema_wraps_object() {
        let schema = question_array();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"], question_object());
    }
}
