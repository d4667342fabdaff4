use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{template_source_from_config, SparqlHttpClient},
    services::{quiz_delegate::QuizDelegate, score_calculator::TallyScoreCalculator},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_delegate: Arc<QuizDelegate>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let knowledge_graph = Arc::new(SparqlHttpClient::new(&config)?);
        let templates = template_source_from_config(&config)?;
        let quiz_delegate = Arc::new(QuizDelegate::new(
            templates,
            knowledge_graph,
            Arc::new(TallyScoreCalculator),
        ));

        Ok(Self {
            quiz_delegate,
            config: Arc::new(config),
        })
    }
}
