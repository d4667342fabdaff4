use async_trait::async_trait;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::dto::sparql::SparqlResponse,
    services::interpolation::supplant,
};

/// Remote structured-data endpoint answering SPARQL queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KnowledgeGraph: Send + Sync {
    async fn query(&self, sparql_query: &str) -> AppResult<SparqlResponse>;
}

pub struct SparqlHttpClient {
    client: reqwest::Client,
    endpoint_template: String,
}

impl SparqlHttpClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.http_user_agent.clone())
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.sparql_endpoint_template))
    }

    pub fn with_client(client: reqwest::Client, endpoint_template: &str) -> Self {
        Self {
            client,
            endpoint_template: endpoint_template.to_string(),
        }
    }

    pub fn endpoint_url(&self, sparql_query: &str) -> String {
        let encoded = urlencoding::encode(sparql_query);
        supplant(&self.endpoint_template, &[("sparql_query", encoded.as_ref())])
    }
}

#[async_trait]
impl KnowledgeGraph for SparqlHttpClient {
    async fn query(&self, sparql_query: &str) -> AppResult<SparqlResponse> {
        let url = self.endpoint_url(sparql_query);
        log::debug!("SPARQL lookup: {}", url);

        let response = self
            .client
            .get(&url)
            .header("accept", "application/sparql-results+json, application/json")
            .send()
            .await
            .map_err(|e| {
                log::error!("SPARQL request failed: {}", e);
                AppError::RemoteFetch(format!("SPARQL request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::RemoteFetch(format!(
                "SPARQL endpoint answered with status {}",
                status
            )));
        }

        let body = response.text().await?;
        let parsed: SparqlResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
