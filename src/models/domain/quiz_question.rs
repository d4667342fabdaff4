use serde::{Deserialize, Serialize};

/// A question whose real answer and distractors have been fetched and shuffled.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolvedQuestion {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: usize, // position of the correct choice
    #[serde(default)]
    pub index: usize, // 1-based, assigned once the whole quiz resolves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
}

impl ResolvedQuestion {
    pub fn new(question: String, choices: Vec<String>, answer: usize) -> Self {
        ResolvedQuestion {
            question,
            choices,
            answer,
            index: 0,
            selected: None,
        }
    }

    pub fn correct_choice(&self) -> Option<&str> {
        self.choices.get(self.answer).map(String::as_str)
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_answered_correctly(&self) -> bool {
        self.selected == Some(self.answer)
    }
}
