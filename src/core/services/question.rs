use crate::core::models::question::Snapshot;
use crate::core::poll::{adopt_status, ongoing_vote_type};
use crate::core::ports::ledger::Ledger;
use crate::core::ports::repository::{QuestionCommon, Store};
use crate::error::Error;
use log::info;

/// Re-reads the question from the remote API, keeping the local
/// status-vote counters of an existing snapshot. A question the API no
/// longer has is dropped from the ledger. A status changed elsewhere ends
/// the local poll.
pub async fn refresh_question<S, L>(store: &mut S, ledger: &mut L, question_id: &str) -> Result<Snapshot, Error>
where
    S: Store,
    L: Ledger,
{
    let remote = match QuestionCommon::get(store, question_id).await {
        Ok(remote) => remote,
        Err(e) => {
            if e.is_not_found() {
                info!("question {} is gone, dropping its snapshot", question_id);
                ledger.drop_snapshot(question_id).await?;
            }
            return Err(e);
        }
    };
    let question = match ledger.snapshot(question_id).await? {
        Some(local) => {
            let status = remote.status;
            let mut merged = local.refreshed_from(remote);
            if local.status != status {
                info!("question {} moved from {} to {} upstream", question_id, local.status, status);
                adopt_status(&mut merged, status);
                ledger.clear_ballots(question_id).await?;
            }
            merged
        }
        None => remote,
    };
    ledger.store_snapshot(question.clone()).await?;
    Ok(Snapshot {
        ongoing_vote: ongoing_vote_type(&question),
        question,
    })
}
