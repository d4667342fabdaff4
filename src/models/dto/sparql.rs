use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// SPARQL 1.1 JSON results document, reduced to what the quiz needs.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SparqlResponse {
    #[serde(default)]
    pub results: SparqlResults,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BindingValue {
    pub value: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// One solution row: variable name -> bound value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Binding(pub HashMap<String, BindingValue>);

impl Binding {
    pub fn value(&self, variable: &str) -> Option<&str> {
        self.0.get(variable).map(|v| v.value.as_str())
    }

    fn require(&self, variable: &str) -> AppResult<String> {
        self.value(variable).map(str::to_string).ok_or_else(|| {
            AppError::MalformedResponse(format!("binding has no '{}' value", variable))
        })
    }
}

impl FromIterator<(String, String)> for Binding {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Binding(
            iter.into_iter()
                .map(|(name, value)| (name, BindingValue { value, kind: None }))
                .collect(),
        )
    }
}

/// First row of the correct-answer lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRecord {
    pub answer: String,
    pub answer_uri: String,
    pub param1: String,
    pub param2: Option<String>,
}

impl TryFrom<SparqlResponse> for AnswerRecord {
    type Error = AppError;

    fn try_from(response: SparqlResponse) -> Result<Self, Self::Error> {
        let binding = response.results.bindings.into_iter().next().ok_or_else(|| {
            AppError::MalformedResponse("correct-answer lookup returned no bindings".to_string())
        })?;

        Ok(AnswerRecord {
            answer: binding.require("answer")?,
            answer_uri: binding.require("answer_uri")?,
            param1: binding.require("param1")?,
            param2: binding.value("param2").map(str::to_string),
        })
    }
}

/// Distractor strings from the wrong-answers lookup, in response order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrongAnswerSet {
    pub answers: Vec<String>,
}

impl TryFrom<SparqlResponse> for WrongAnswerSet {
    type Error = AppError;

    fn try_from(response: SparqlResponse) -> Result<Self, Self::Error> {
        let answers = response
            .results
            .bindings
            .iter()
            .map(|binding| binding.require("answer"))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(WrongAnswerSet { answers })
    }
}
