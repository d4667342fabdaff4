use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Score {
    pub quiz_uid: Option<String>,
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
    pub percentage: u8, // 0..=100, rounded
    pub calculated_at: DateTime<Utc>,
}
