use std::env;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_SPARQL_ENDPOINT_TEMPLATE: &str =
    "http://nl.dbpedia.org/sparql?query={sparql_query}&output=json";
pub const DEFAULT_QUIZ_TEMPLATE_LOCATION: &str = "./assets/data/sparql_quiz_{id}.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub sparql_endpoint_template: String,
    pub quiz_template_location: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub http_user_agent: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            sparql_endpoint_template: env::var("SPARQL_ENDPOINT_TEMPLATE")
                .unwrap_or_else(|_| DEFAULT_SPARQL_ENDPOINT_TEMPLATE.to_string()),
            quiz_template_location: env::var("QUIZ_TEMPLATE_LOCATION")
                .unwrap_or_else(|_| DEFAULT_QUIZ_TEMPLATE_LOCATION.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            http_user_agent: env::var("HTTP_USER_AGENT").unwrap_or_else(|_| {
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            }),
        }
    }

    /// Both location templates must carry the placeholder they get filled with,
    /// otherwise every lookup would hit the same resource.
    pub fn validate(&self) -> AppResult<()> {
        if !self.sparql_endpoint_template.contains("{sparql_query}") {
            return Err(AppError::ValidationError(format!(
                "SPARQL_ENDPOINT_TEMPLATE '{}' has no {{sparql_query}} placeholder",
                self.sparql_endpoint_template
            )));
        }

        if !self.quiz_template_location.contains("{id}") {
            return Err(AppError::ValidationError(format!(
                "QUIZ_TEMPLATE_LOCATION '{}' has no {{id}} placeholder",
                self.quiz_template_location
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            sparql_endpoint_template: "http://localhost:8890/sparql?query={sparql_query}&output=json"
                .to_string(),
            quiz_template_location: "./assets/data/sparql_quiz_{id}.json".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            http_user_agent: "sparql-quizzer-test".to_string(),
        }
    }
}
