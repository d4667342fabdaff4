use serde::{Deserialize, Serialize};

use crate::{errors::AppError, models::domain::quiz_question::ResolvedQuestion};

/// Cursor into a quiz's questions. `None` means "before the first question".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavigationState {
    pub current_index: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "QuizWire")]
pub struct Quiz {
    pub uid: Option<String>,
    pub name: Option<String>,
    questions: Vec<ResolvedQuestion>, // fixed once assembled
    #[serde(default)]
    navigation: NavigationState,
}

/// Wire form of a quiz as submitted by clients. Checked before it becomes a `Quiz`.
#[derive(Deserialize)]
struct QuizWire {
    uid: Option<String>,
    name: Option<String>,
    #[serde(default)]
    questions: Vec<ResolvedQuestion>,
    #[serde(default)]
    navigation: NavigationState,
}

impl TryFrom<QuizWire> for Quiz {
    type Error = AppError;

    fn try_from(wire: QuizWire) -> Result<Self, Self::Error> {
        for (position, question) in wire.questions.iter().enumerate() {
            let choices = question.choices.len();
            if question.answer >= choices {
                return Err(AppError::ValidationError(format!(
                    "question {} has answer {} but only {} choices",
                    position + 1,
                    question.answer,
                    choices
                )));
            }
            if let Some(selected) = question.selected.filter(|s| *s >= choices) {
                return Err(AppError::ValidationError(format!(
                    "question {} has selection {} but only {} choices",
                    position + 1,
                    selected,
                    choices
                )));
            }
        }

        if let Some(index) = wire.navigation.current_index.filter(|i| *i >= wire.questions.len()) {
            return Err(AppError::ValidationError(format!(
                "cursor {} is outside a quiz of {} questions",
                index,
                wire.questions.len()
            )));
        }

        let mut quiz = Quiz {
            uid: wire.uid,
            name: wire.name,
            questions: wire.questions,
            navigation: wire.navigation,
        };
        quiz.add_question_indices();
        Ok(quiz)
    }
}

impl Quiz {
    /// Builds a quiz positioned before its first question, numbering the
    /// questions 1..=n in the order given.
    pub fn new(uid: Option<String>, name: Option<String>, questions: Vec<ResolvedQuestion>) -> Self {
        let mut quiz = Quiz {
            uid,
            name,
            questions,
            navigation: NavigationState::default(),
        };
        quiz.add_question_indices();
        quiz
    }

    fn add_question_indices(&mut self) {
        for (position, question) in self.questions.iter_mut().enumerate() {
            question.index = position + 1;
        }
    }

    pub fn questions(&self) -> &[ResolvedQuestion] {
        &self.questions
    }

    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.navigation.current_index
    }

    /// The question under the cursor. The last question is never reported here;
    /// callers that reach it get it from `next_question`/`seek_question`.
    pub fn current(&self) -> Option<&ResolvedQuestion> {
        let index = self.navigation.current_index?;
        if index + 1 < self.num_questions() {
            self.questions.get(index)
        } else {
            None
        }
    }

    pub fn has_next(&self) -> bool {
        let count = self.num_questions();
        match self.navigation.current_index {
            _ if count == 0 => false,
            None => true,
            Some(index) => index + 1 < count,
        }
    }

    pub fn next_question(&mut self) -> Option<&ResolvedQuestion> {
        if !self.has_next() {
            return None;
        }

        let next = self.navigation.current_index.map_or(0, |index| index + 1);
        self.navigation.current_index = Some(next);
        self.questions.get(next)
    }

    /// Moves to the 1-based `number`. Out of range leaves the cursor alone.
    pub fn seek_question(&mut self, number: usize) -> Option<&ResolvedQuestion> {
        let index = number.checked_sub(1)?;
        if index >= self.num_questions() {
            return None;
        }

        self.navigation.current_index = Some(index);
        self.questions.get(index)
    }

    /// Rewinds before the first question and forgets the user's selections.
    /// Choices and answers stay exactly as resolved.
    pub fn reset(&mut self) {
        self.navigation.current_index = None;

        for question in &mut self.questions {
            question.selected = None;
        }
    }

    /// Records a choice for the question under the cursor.
    pub fn select_answer(&mut self, choice: usize) -> bool {
        let Some(index) = self.navigation.current_index else {
            return false;
        };

        match self.questions.get_mut(index) {
            Some(question) if choice < question.choices.len() => {
                question.selected = Some(choice);
                true
            }
            _ => false,
        }
    }
}
