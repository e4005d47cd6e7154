use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Question,
    Answer,
    Comment,
}

/// Anything that can receive a content vote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    Question { question_id: String },
    Answer { question_id: String, answer_id: String },
    Comment { question_id: String, comment_id: String },
}

impl Subject {
    pub fn question(question_id: impl Into<String>) -> Self {
        Subject::Question { question_id: question_id.into() }
    }

    pub fn answer(question_id: impl Into<String>, answer_id: impl Into<String>) -> Self {
        Subject::Answer {
            question_id: question_id.into(),
            answer_id: answer_id.into(),
        }
    }

    pub fn comment(question_id: impl Into<String>, comment_id: impl Into<String>) -> Self {
        Subject::Comment {
            question_id: question_id.into(),
            comment_id: comment_id.into(),
        }
    }

    pub fn kind(&self) -> SubjectKind {
        match self {
            Subject::Question { .. } => SubjectKind::Question,
            Subject::Answer { .. } => SubjectKind::Answer,
            Subject::Comment { .. } => SubjectKind::Comment,
        }
    }

    pub fn question_id(&self) -> &str {
        match self {
            Subject::Question { question_id } | Subject::Answer { question_id, .. } | Subject::Comment { question_id, .. } => question_id,
        }
    }

    /// Resource path of the subject on the remote API, without a leading slash.
    pub fn path(&self) -> String {
        match self {
            Subject::Question { question_id } => format!("questions/{}", question_id),
            Subject::Answer { question_id, answer_id } => format!("questions/{}/answers/{}", question_id, answer_id),
            Subject::Comment { question_id, comment_id } => format!("questions/{}/comments/{}", question_id, comment_id),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteDirection {
    #[serde(rename = "upvotes", alias = "upvoted")]
    Up,
    #[serde(rename = "downvotes", alias = "downvoted")]
    Down,
}

impl VoteDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDirection::Up => "upvotes",
            VoteDirection::Down => "downvotes",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub target: VoteDirection,
}

/// Body of `PATCH {subject}/vote/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VotePatch {
    pub operation: Operation,
    pub target: VoteDirection,
}

/// Emitted once a content vote has been recorded upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCast {
    pub subject: SubjectKind,
    pub creator: Option<String>,
    pub voter: String,
    pub direction: VoteDirection,
}

#[derive(Debug, Deserialize)]
pub struct VoteCreate {
    pub direction: VoteDirection,
}

#[derive(Debug, Serialize)]
pub struct VoteState {
    pub voted: bool,
    pub target: Option<VoteDirection>,
}

impl From<Option<VoteRecord>> for VoteState {
    fn from(record: Option<VoteRecord>) -> Self {
        VoteState {
            voted: record.is_some(),
            target: record.map(|r| r.target),
        }
    }
}
