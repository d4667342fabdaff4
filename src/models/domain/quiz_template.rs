use serde::{Deserialize, Serialize};

/// Author-written description of a quiz before any remote data is resolved into it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct QuizTemplate {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub questions: Vec<QuestionTemplate>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuestionTemplate {
    pub question: String, // {param1} / {param2} placeholders
    pub choices: Vec<String>, // [correct answer query, wrong answers query template]
    #[serde(default)]
    pub answer: serde_json::Value, // unused, kept so authored files round-trip
}

impl QuestionTemplate {
    pub fn new(question: &str, answer_query: &str, wrong_answers_query: &str) -> Self {
        QuestionTemplate {
            question: question.to_string(),
            choices: vec![answer_query.to_string(), wrong_answers_query.to_string()],
            answer: serde_json::Value::Null,
        }
    }

    pub fn answer_query(&self) -> Option<&str> {
        self.choices.first().map(String::as_str)
    }

    pub fn wrong_answers_query(&self) -> Option<&str> {
        self.choices.get(1).map(String::as_str)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<QuestionTemplate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let questions: Option<Vec<QuestionTemplate>> = Option::deserialize(deserializer)?;
    Ok(questions.unwrap_or_default())
}
