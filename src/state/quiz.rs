//! Quiz questions and loading

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

/// A single multiple choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    fn new(id: u32, text: &str, options: [&str; 4]) -> Self {
        Self {
            id,
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// The built-in question set
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(1, "What is Neo4j?", ["Graph DB", "SQL DB", "NoSQL DB", "Cache"]),
        Question::new(
            2,
            "What language does Neo4j use?",
            ["Cypher", "SQL", "MongoDB Query", "GraphQL"],
        ),
        Question::new(
            3,
            "What is a node in Neo4j?",
            ["Entity", "Relationship", "Property", "Index"],
        ),
    ]
}

/// Load a question set from a JSON array on disk
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_questions(&raw)
}

/// Parse a question set, rejecting an empty list
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, String> {
    let questions: Vec<Question> =
        serde_json::from_str(raw).map_err(|e| format!("Invalid question file: {}", e))?;

    if questions.is_empty() {
        return Err("Question file contains no questions".to_string());
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_three_questions() {
        let questions = default_questions();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1].options[0], "Cypher");
    }

    #[test]
    fn parses_question_array() {
        let raw = r#"[{"id": 7, "text": "Pick one", "options": ["a", "b"]}]"#;
        let questions = parse_questions(raw).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, 7);
    }

    #[test]
    fn rejects_empty_question_array() {
        assert!(parse_questions("[]").is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_questions("{not json").unwrap_err();
        assert!(err.starts_with("Invalid question file"));
    }
}
