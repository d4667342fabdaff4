use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{QuestionTemplate, ResolvedQuestion},
        dto::sparql::{AnswerRecord, WrongAnswerSet},
    },
    repositories::KnowledgeGraph,
    services::interpolation::supplant,
};

/// Turns one question template into a playable question with two lookups:
/// the correct answer first, then distractors keyed on that answer's URI.
pub struct QuestionResolver {
    knowledge_graph: Arc<dyn KnowledgeGraph>,
}

impl QuestionResolver {
    pub fn new(knowledge_graph: Arc<dyn KnowledgeGraph>) -> Self {
        Self { knowledge_graph }
    }

    pub async fn resolve(&self, template: &QuestionTemplate) -> AppResult<ResolvedQuestion> {
        let (answer_query, wrong_answers_template) =
            match (template.answer_query(), template.wrong_answers_query()) {
                (Some(answer), Some(wrong)) => (answer, wrong),
                _ => {
                    return Err(AppError::MalformedResponse(format!(
                        "Question template '{}' needs an answer query and a wrong-answers query",
                        template.question
                    )))
                }
            };

        let record = self.lookup_answer(answer_query).await?;
        let wrong_answers = self.lookup_wrong_answers(wrong_answers_template, &record).await?;

        Ok(assemble_question(template, &record, wrong_answers))
    }

    async fn lookup_answer(&self, answer_query: &str) -> AppResult<AnswerRecord> {
        let response = self.knowledge_graph.query(answer_query).await?;
        AnswerRecord::try_from(response)
    }

    async fn lookup_wrong_answers(
        &self,
        query_template: &str,
        record: &AnswerRecord,
    ) -> AppResult<WrongAnswerSet> {
        let query = supplant(query_template, &[("answer_uri", record.answer_uri.as_str())]);
        let response = self.knowledge_graph.query(&query).await?;
        WrongAnswerSet::try_from(response)
    }
}

/// Merges and shuffles the choices. A distractor equal to the correct answer
/// collapses onto whichever copy comes first after the shuffle.
pub fn assemble_question(
    template: &QuestionTemplate,
    record: &AnswerRecord,
    wrong_answers: WrongAnswerSet,
) -> ResolvedQuestion {
    let mut choices = wrong_answers.answers;
    choices.push(record.answer.clone());
    choices.shuffle(&mut rand::thread_rng());

    let answer = choices
        .iter()
        .position(|choice| *choice == record.answer)
        .unwrap_or(choices.len() - 1);

    let question = supplant(
        &template.question,
        &[
            ("param1", record.param1.as_str()),
            ("param2", record.param2.as_deref().unwrap_or("")),
        ],
    );

    ResolvedQuestion::new(question, choices, answer)
}
