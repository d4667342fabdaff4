use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{Quiz, Score},
    repositories::{KnowledgeGraph, QuizTemplateSource},
    services::{quiz_builder::QuizBuilder, score_calculator::ScoreCalculator},
};

/// Loads quiz templates, builds quizzes from them and scores finished ones.
pub struct QuizDelegate {
    templates: Arc<dyn QuizTemplateSource>,
    builder: QuizBuilder,
    scorer: Arc<dyn ScoreCalculator>,
}

impl QuizDelegate {
    pub fn new(
        templates: Arc<dyn QuizTemplateSource>,
        knowledge_graph: Arc<dyn KnowledgeGraph>,
        scorer: Arc<dyn ScoreCalculator>,
    ) -> Self {
        Self {
            templates,
            builder: QuizBuilder::new(knowledge_graph),
            scorer,
        }
    }

    pub async fn load_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        log::debug!("load_quiz( quiz_id={} )", quiz_id);

        let template = self.templates.fetch(quiz_id).await?;
        self.builder.build(template).await
    }

    /// Scored locally, no remote call. `_who` is reserved for a remote `{quiz, who}` submission.
    pub async fn submit_quiz(&self, quiz: &Quiz, _who: &str) -> AppResult<Score> {
        log::debug!("submit_quiz( quiz_uid={:?} )", quiz.uid);

        let score = self.scorer.calculate_score(quiz);
        Ok(score)
    }
}
