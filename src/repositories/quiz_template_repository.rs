use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::QuizTemplate,
    services::interpolation::supplant,
};

/// Where quiz templates live. `Ok(None)` means the resource exists but holds
/// no template (a JSON `null`), which the builder treats as an empty quiz.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizTemplateSource: Send + Sync {
    async fn fetch(&self, quiz_id: &str) -> AppResult<Option<QuizTemplate>>;
}

/// Picks the HTTP or filesystem source from the shape of the configured location.
pub fn template_source_from_config(config: &Config) -> AppResult<Arc<dyn QuizTemplateSource>> {
    let location = &config.quiz_template_location;
    if location.starts_with("http://") || location.starts_with("https://") {
        let client = reqwest::Client::builder()
            .user_agent(config.http_user_agent.clone())
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Arc::new(HttpQuizTemplateSource::new(client, location)))
    } else {
        Ok(Arc::new(FileQuizTemplateSource::new(location)))
    }
}

fn parse_template(quiz_id: &str, body: &str) -> AppResult<Option<QuizTemplate>> {
    serde_json::from_str(body).map_err(|e| {
        AppError::MalformedResponse(format!("Quiz template '{}' is not valid JSON: {}", quiz_id, e))
    })
}

pub struct HttpQuizTemplateSource {
    client: reqwest::Client,
    location_template: String,
}

impl HttpQuizTemplateSource {
    pub fn new(client: reqwest::Client, location_template: &str) -> Self {
        Self {
            client,
            location_template: location_template.to_string(),
        }
    }

    pub fn location(&self, quiz_id: &str) -> String {
        let encoded = urlencoding::encode(quiz_id);
        supplant(&self.location_template, &[("id", encoded.as_ref())])
    }
}

#[async_trait]
impl QuizTemplateSource for HttpQuizTemplateSource {
    async fn fetch(&self, quiz_id: &str) -> AppResult<Option<QuizTemplate>> {
        let url = self.location(quiz_id);
        log::debug!("Fetching quiz template {} from {}", quiz_id, url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Quiz template '{}' not found", quiz_id)));
        }
        if !status.is_success() {
            return Err(AppError::RemoteFetch(format!(
                "Quiz template fetch for '{}' answered with status {}",
                quiz_id, status
            )));
        }

        let body = response.text().await?;
        parse_template(quiz_id, &body)
    }
}

pub struct FileQuizTemplateSource {
    path_template: String,
}

impl FileQuizTemplateSource {
    pub fn new(path_template: &str) -> Self {
        Self {
            path_template: path_template.to_string(),
        }
    }

    pub fn location(&self, quiz_id: &str) -> String {
        supplant(&self.path_template, &[("id", quiz_id)])
    }
}

#[async_trait]
impl QuizTemplateSource for FileQuizTemplateSource {
    async fn fetch(&self, quiz_id: &str) -> AppResult<Option<QuizTemplate>> {
        if quiz_id.contains('/') || quiz_id.contains('\\') || quiz_id.contains("..") {
            return Err(AppError::ValidationError(format!("Invalid quiz id '{}'", quiz_id)));
        }

        let path = self.location(quiz_id);
        log::debug!("Reading quiz template {} from {}", quiz_id, path);

        let body = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::NotFound(format!("Quiz template '{}' not found", quiz_id))
            }
            _ => AppError::from(e),
        })?;

        parse_template(quiz_id, &body)
    }
}
