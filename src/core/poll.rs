use crate::core::models::question::{Question, QuestionStatus, StatusVoteKind};
use crate::error::Error;

/// Votes needed for a status poll to change the question's status.
pub const THRESHOLD: u32 = 3;

/// Precedence when more than one counter sits below the threshold.
const PRECEDENCE: [StatusVoteKind; 3] = [StatusVoteKind::Protected, StatusVoteKind::Closed, StatusVoteKind::Open];

pub fn can_transition(from: QuestionStatus, kind: StatusVoteKind) -> bool {
    matches!(
        (from, kind),
        (QuestionStatus::Open, StatusVoteKind::Closed)
            | (QuestionStatus::Open, StatusVoteKind::Protected)
            | (QuestionStatus::Closed, StatusVoteKind::Open)
            | (QuestionStatus::Protected, StatusVoteKind::Open)
            | (QuestionStatus::Protected, StatusVoteKind::Closed)
    )
}

pub fn ongoing_vote_type(question: &Question) -> Option<StatusVoteKind> {
    PRECEDENCE.into_iter().find(|kind| {
        let votes = question.votes(*kind);
        votes > 0 && votes < THRESHOLD
    })
}

/// Outcome of counting one status vote against a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally {
    /// The counter moved but is still below the threshold.
    Pending { votes: u32 },
    /// The counter reached the threshold; the status must be persisted.
    Reached { status: QuestionStatus },
}

/// Counts one vote of `kind` on `question`.
///
/// Only the counter is touched here. When the threshold is reached the
/// caller persists the new status first and then calls [`apply_status`].
pub fn count_vote(question: &mut Question, kind: StatusVoteKind) -> Result<Tally, Error> {
    if !can_transition(question.status, kind) {
        return Err(Error::InvalidTransition {
            status: question.status.to_string(),
            kind: kind.to_string(),
        });
    }
    if let Some(ongoing) = ongoing_vote_type(question) {
        if ongoing != kind {
            return Err(Error::VoteInProgress(ongoing.to_string()));
        }
    }
    let votes = question.votes(kind) + 1;
    question.set_votes(kind, votes);
    if votes >= THRESHOLD {
        return Ok(Tally::Reached { status: kind.target() });
    }
    Ok(Tally::Pending { votes })
}

/// Moves the snapshot into `status`. Counters of the polls that can leave
/// the new status start again from zero.
pub fn apply_status(question: &mut Question, status: QuestionStatus) {
    question.status = status;
    for kind in PRECEDENCE {
        if kind.target() != status {
            question.set_votes(kind, 0);
        }
    }
}

/// Moves the snapshot into a status that was set elsewhere. Polls still
/// below the threshold are dropped.
pub fn adopt_status(question: &mut Question, status: QuestionStatus) {
    apply_status(question, status);
    for kind in PRECEDENCE {
        if question.votes(kind) < THRESHOLD {
            question.set_votes(kind, 0);
        }
    }
}
