use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_BOUNTY: u32 = 75;
pub const MAX_BOUNTY: u32 = 500;
/// Points a user must keep after paying for a bounty.
pub const MIN_REMAINING_POINTS: i64 = 75;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bounty {
    pub question_id: String,
    pub amount: u32,
    pub added_by: String,
    pub created_at: DateTime<Utc>,
    pub awarded_to: Option<String>,
    pub awarded_at: Option<DateTime<Utc>>,
}

impl Bounty {
    pub fn is_awarded(&self) -> bool {
        self.awarded_to.is_some()
    }
}

#[derive(Debug, Deserialize)]
pub struct Create {
    pub amount: u32,
}

#[derive(Debug, Deserialize)]
pub struct Award {
    pub answer_id: String,
}
