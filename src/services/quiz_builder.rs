use std::sync::Arc;

use futures::future::try_join_all;

use crate::{
    errors::AppResult,
    models::domain::{Quiz, QuizTemplate},
    repositories::KnowledgeGraph,
    services::question_resolver::QuestionResolver,
};

pub struct QuizBuilder {
    resolver: QuestionResolver,
}

impl QuizBuilder {
    pub fn new(knowledge_graph: Arc<dyn KnowledgeGraph>) -> Self {
        Self {
            resolver: QuestionResolver::new(knowledge_graph),
        }
    }

    /// Resolves every question concurrently. Any failed question fails the
    /// whole build; an absent template yields an empty quiz.
    pub async fn build(&self, template: Option<QuizTemplate>) -> AppResult<Quiz> {
        let template = template.unwrap_or_default();
        log::debug!(
            "Building quiz {:?} with {} questions",
            template.uid,
            template.questions.len()
        );

        let questions =
            try_join_all(template.questions.iter().map(|q| self.resolver.resolve(q))).await?;

        let quiz = Quiz::new(template.uid, template.name, questions);
        log::info!(
            "Built quiz {:?} ({} questions)",
            quiz.uid,
            quiz.num_questions()
        );
        Ok(quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::repositories::knowledge_graph::MockKnowledgeGraph;
    use crate::models::dto::sparql::SparqlResponse;
    use crate::test_utils::fixtures::{answer_response, template, wrong_answers_response};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Barrier;

    /// Holds every correct-answer lookup until `questions` of them are in flight.
    struct GatedGraph {
        gate: Barrier,
    }

    #[async_trait]
    impl KnowledgeGraph for GatedGraph {
        async fn query(&self, sparql_query: &str) -> AppResult<SparqlResponse> {
            match sparql_query.strip_prefix("ANSWER ") {
                Some(name) => {
                    self.gate.wait().await;
                    Ok(answer_response(name, "Province"))
                }
                None => Ok(wrong_answers_response(&["Wrong"])),
            }
        }
    }

    /// Answers "ANSWER <name>" with the capital `name` and every wrong-answers
    /// query with two distractors.
    fn scripted_graph() -> MockKnowledgeGraph {
        let mut graph = MockKnowledgeGraph::new();
        graph.expect_query().returning(|query| {
            if let Some(name) = query.strip_prefix("ANSWER ") {
                Ok(answer_response(name, "Province"))
            } else {
                Ok(wrong_answers_response(&["Wrong A", "Wrong B"]))
            }
        });
        graph
    }

    #[tokio::test]
    async fn build_numbers_questions_in_template_order() {
        let builder = QuizBuilder::new(Arc::new(scripted_graph()));
        let template = QuizTemplate {
            uid: Some("1".to_string()),
            name: Some("Capitals".to_string()),
            questions: vec![template("Assen"), template("Zwolle"), template("Haarlem")],
        };

        let quiz = builder.build(Some(template)).await.expect("quiz should build");

        assert_eq!(quiz.num_questions(), 3);
        assert_eq!(quiz.current_index(), None);
        let answers: Vec<(usize, &str)> = quiz
            .questions()
            .iter()
            .map(|q| (q.index, q.correct_choice().unwrap_or_default()))
            .collect();
        assert_eq!(answers, vec![(1, "Assen"), (2, "Zwolle"), (3, "Haarlem")]);
    }

    #[tokio::test]
    async fn absent_template_builds_empty_quiz() {
        let builder = QuizBuilder::new(Arc::new(MockKnowledgeGraph::new()));

        let quiz = builder.build(None).await.expect("empty quiz should build");

        assert_eq!(quiz.uid, None);
        assert_eq!(quiz.name, None);
        assert_eq!(quiz.num_questions(), 0);
        assert!(!quiz.has_next());
        assert!(quiz.current().is_none());
    }

    #[tokio::test]
    async fn one_failed_question_fails_the_build() {
        let mut graph = MockKnowledgeGraph::new();
        graph.expect_query().returning(|query| {
            if let Some(name) = query.strip_prefix("ANSWER ") {
                Ok(answer_response(name, "Province"))
            } else if query.contains("Broken") {
                Err(AppError::RemoteFetch("wrong-answers lookup failed".to_string()))
            } else {
                Ok(wrong_answers_response(&["Wrong"]))
            }
        });

        let builder = QuizBuilder::new(Arc::new(graph));
        let template = QuizTemplate {
            uid: Some("2".to_string()),
            name: None,
            questions: vec![template("Assen"), template("Broken")],
        };

        let err = builder.build(Some(template)).await.unwrap_err();
        assert!(matches!(err, AppError::RemoteFetch(_)));
    }

    #[tokio::test]
    async fn build_starts_every_question_before_any_answer_returns() {
        let names = ["Assen", "Zwolle", "Haarlem", "Utrecht"];
        let graph = GatedGraph {
            gate: Barrier::new(names.len()),
        };
        let builder = QuizBuilder::new(Arc::new(graph));
        let template = QuizTemplate {
            uid: Some("gated".to_string()),
            name: None,
            questions: names.iter().map(|n| template(n)).collect(),
        };

        let quiz = tokio::time::timeout(Duration::from_secs(5), builder.build(Some(template)))
            .await
            .expect("lookups should all be in flight together")
            .expect("quiz should build");

        assert_eq!(quiz.num_questions(), names.len());
    }
}
