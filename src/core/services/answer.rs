use crate::core::models::answer::{Answer, Insert, MAX_ANSWER_LENGTH};
use crate::core::models::user::PointsChange;
use crate::core::ports::ledger::Ledger;
use crate::core::ports::repository::{AnswerCommon, QuestionCommon, Store};
use crate::core::reputation::{Reputation, ANSWER_POSTED_POINTS};
use crate::error::Error;
use log::{error, info, warn};

pub async fn create_answer<S>(store: &mut S, question_id: &str, username: &str, text: String) -> Result<Answer, Error>
where
    S: Store,
{
    let length = text.chars().count();
    if text.trim().is_empty() {
        return Err(Error::BusinessError("answer must not be empty".into()));
    }
    if length > MAX_ANSWER_LENGTH {
        return Err(Error::BusinessError(format!("answer is {} characters, limit is {}", length, MAX_ANSWER_LENGTH)));
    }
    let answer = AnswerCommon::insert(
        store,
        question_id,
        Insert {
            creator: username.to_owned(),
            text,
        },
    )
    .await?;
    info!("{} answered question {}", username, question_id);
    if let Err(e) = Reputation::new(store).apply(&PointsChange::new(username, ANSWER_POSTED_POINTS)).await {
        error!("failed to award answer points to {}: {}", username, e);
    }
    Ok(answer)
}

/// Marks `answer_id` as the accepted answer. Only the question's creator
/// may accept, and only once.
pub async fn accept_answer<S, L>(store: &mut S, ledger: &mut L, question_id: &str, answer_id: &str, username: &str) -> Result<(), Error>
where
    S: Store,
    L: Ledger,
{
    let question = QuestionCommon::get(store, question_id).await?;
    if question.creator != username {
        warn!("{} tried to accept an answer on {}'s question {}", username, question.creator, question_id);
        return Err(Error::Unauthorized);
    }
    if question.has_accepted_answer {
        return Err(Error::BusinessError("question already has an accepted answer".into()));
    }
    AnswerCommon::accept(store, question_id, answer_id).await?;
    info!("answer {} accepted on question {}", answer_id, question_id);
    if let Some(mut snapshot) = ledger.snapshot(question_id).await? {
        snapshot.has_accepted_answer = true;
        ledger.store_snapshot(snapshot).await?;
    }
    Ok(())
}
