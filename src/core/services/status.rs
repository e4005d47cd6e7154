use crate::core::models::question::{Snapshot, StatusVoteKind};
use crate::core::poll::{apply_status, count_vote, ongoing_vote_type, Tally};
use crate::core::ports::ledger::Ledger;
use crate::core::ports::repository::{QuestionCommon, Store};
use crate::core::services::question::refresh_question;
use crate::error::Error;
use log::{error, info};

/// Counts one status vote from `username`. Votes on one question run one
/// at a time, against the current remote copy of the question. Nothing is
/// written locally until the remote API has accepted any status change
/// the vote causes.
pub async fn cast_status_vote<S, L>(store: &mut S, ledger: &mut L, question_id: &str, username: &str, kind: StatusVoteKind) -> Result<Snapshot, Error>
where
    S: Store,
    L: Ledger,
{
    let _poll = ledger.lock_poll(question_id).await?;
    if ledger.has_ballot(question_id, username, kind).await? {
        return Err(Error::AlreadyBalloted(kind.to_string()));
    }
    let mut question = refresh_question(store, ledger, question_id).await?.question;
    match count_vote(&mut question, kind)? {
        Tally::Pending { votes } => {
            if !ledger.insert_ballot(question_id, username, kind).await? {
                return Err(Error::AlreadyBalloted(kind.to_string()));
            }
            info!("{} voted {} on question {} ({}/3)", username, kind, question_id, votes);
            ledger.store_snapshot(question.clone()).await?;
        }
        Tally::Reached { status } => {
            if let Err(e) = QuestionCommon::update_status(store, question_id, status).await {
                error!("failed to persist status {} for question {}: {}", status, question_id, e);
                return Err(e);
            }
            info!("question {} is now {}", question_id, status);
            apply_status(&mut question, status);
            ledger.store_snapshot(question.clone()).await?;
            ledger.clear_ballots(question_id).await?;
        }
    }
    Ok(Snapshot {
        ongoing_vote: ongoing_vote_type(&question),
        question,
    })
}
