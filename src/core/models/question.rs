use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    #[default]
    Open,
    Closed,
    Protected,
}

impl QuestionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionStatus::Open => "open",
            QuestionStatus::Closed => "closed",
            QuestionStatus::Protected => "protected",
        }
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The status a status vote pushes the question towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusVoteKind {
    Closed,
    Protected,
    Open,
}

impl StatusVoteKind {
    pub fn target(&self) -> QuestionStatus {
        match self {
            StatusVoteKind::Closed => QuestionStatus::Closed,
            StatusVoteKind::Protected => QuestionStatus::Protected,
            StatusVoteKind::Open => QuestionStatus::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.target().as_str()
    }
}

impl fmt::Display for StatusVoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "question_id")]
    pub question_id: String,
    pub creator: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: i64,
    pub status: QuestionStatus,
    #[serde(default)]
    pub has_accepted_answer: bool,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
    #[serde(default)]
    pub answers: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub closed_votes: Option<u32>,
    #[serde(default)]
    pub protected_votes: Option<u32>,
    #[serde(default)]
    pub open_votes: Option<u32>,
}

impl Question {
    pub fn votes(&self, kind: StatusVoteKind) -> u32 {
        match kind {
            StatusVoteKind::Closed => self.closed_votes,
            StatusVoteKind::Protected => self.protected_votes,
            StatusVoteKind::Open => self.open_votes,
        }
        .unwrap_or(0)
    }

    pub fn set_votes(&mut self, kind: StatusVoteKind, count: u32) {
        let slot = match kind {
            StatusVoteKind::Closed => &mut self.closed_votes,
            StatusVoteKind::Protected => &mut self.protected_votes,
            StatusVoteKind::Open => &mut self.open_votes,
        };
        *slot = Some(count);
    }

    /// Keeps the local status-vote counters while taking everything else
    /// from a fresh remote copy.
    pub fn refreshed_from(&self, mut remote: Question) -> Question {
        remote.closed_votes = Some(self.votes(StatusVoteKind::Closed));
        remote.protected_votes = Some(self.votes(StatusVoteKind::Protected));
        remote.open_votes = Some(self.votes(StatusVoteKind::Open));
        remote
    }
}

/// A question as handed back to the browser, with the derived poll state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub question: Question,
    pub ongoing_vote: Option<StatusVoteKind>,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdate {
    pub status: QuestionStatus,
}
