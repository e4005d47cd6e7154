use serde::{Deserialize, Serialize};

pub const MAX_ANSWER_LENGTH: usize = 3000;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    #[serde(rename = "answer_id")]
    pub answer_id: String,
    pub creator: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub accepted: bool,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
}

#[derive(Debug, Deserialize)]
pub struct Submit {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insert {
    pub creator: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct Accept {
    pub accepted: bool,
}
