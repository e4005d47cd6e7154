use crate::core::models::{bounty::Bounty, question::Question, question::StatusVoteKind};
use crate::error::Error;

/// Cached question snapshots, carrying the status-vote counters the remote
/// API does not keep.
pub trait SnapshotCommon {
    async fn snapshot(&mut self, question_id: &str) -> Result<Option<Question>, Error>;
    async fn store_snapshot(&mut self, question: Question) -> Result<(), Error>;
    async fn drop_snapshot(&mut self, question_id: &str) -> Result<(), Error>;
}

/// One status vote per (question, user, kind) for the current poll.
pub trait BallotCommon {
    async fn has_ballot(&mut self, question_id: &str, username: &str, kind: StatusVoteKind) -> Result<bool, Error>;
    /// Returns false when the ballot was already there.
    async fn insert_ballot(&mut self, question_id: &str, username: &str, kind: StatusVoteKind) -> Result<bool, Error>;
    async fn clear_ballots(&mut self, question_id: &str) -> Result<(), Error>;
}

/// Serialises status polls on one question. The poll stays locked until
/// the returned guard is dropped.
pub trait PollLockCommon {
    type Guard;
    async fn lock_poll(&mut self, question_id: &str) -> Result<Self::Guard, Error>;
}

pub trait BountyCommon {
    async fn get_bounty(&mut self, question_id: &str) -> Result<Option<Bounty>, Error>;
    async fn put_bounty(&mut self, bounty: Bounty) -> Result<(), Error>;
}

pub trait Ledger: SnapshotCommon + BallotCommon + PollLockCommon + BountyCommon {}

impl<T> Ledger for T where T: SnapshotCommon + BallotCommon + PollLockCommon + BountyCommon {}
