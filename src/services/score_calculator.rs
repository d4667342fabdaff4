use chrono::Utc;

use crate::models::domain::{Quiz, Score};

#[cfg_attr(test, mockall::automock)]
pub trait ScoreCalculator: Send + Sync {
    fn calculate_score(&self, quiz: &Quiz) -> Score;
}

/// One point per question whose selection matches its answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TallyScoreCalculator;

impl ScoreCalculator for TallyScoreCalculator {
    fn calculate_score(&self, quiz: &Quiz) -> Score {
        let total = quiz.num_questions();
        let correct = quiz
            .questions()
            .iter()
            .filter(|q| q.is_answered_correctly())
            .count();
        let unanswered = quiz.questions().iter().filter(|q| !q.is_answered()).count();

        let percentage = if total == 0 {
            0
        } else {
            ((correct as f64 / total as f64) * 100.0).round() as u8
        };

        Score {
            quiz_uid: quiz.uid.clone(),
            total,
            correct,
            incorrect: total - correct - unanswered,
            unanswered,
            percentage,
            calculated_at: Utc::now(),
        }
    }
}
