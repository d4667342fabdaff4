use serde::{Deserialize, Serialize};

use crate::models::domain::Quiz;

/// Payload for submitting a completed quiz. `who` identifies the test taker.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmitQuizRequest {
    pub quiz: Quiz,
    #[serde(default)]
    pub who: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_parses_with_optional_who() {
        let json = serde_json::json!({
            "quiz": {"uid": "1", "name": "n", "questions": []}
        });

        let request: SubmitQuizRequest = serde_json::from_value(json).unwrap();

        assert_eq!(request.who, "");
        assert_eq!(request.quiz.num_questions(), 0);
    }
}
