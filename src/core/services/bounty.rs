use crate::core::models::bounty::{Bounty, MAX_BOUNTY, MIN_BOUNTY, MIN_REMAINING_POINTS};
use crate::core::models::user::PointsChange;
use crate::core::ports::ledger::Ledger;
use crate::core::ports::repository::{AnswerCommon, QuestionCommon, Store, UserCommon};
use crate::core::reputation::Reputation;
use crate::error::Error;
use chrono::Utc;
use log::info;

pub async fn bounty_detail<L>(ledger: &mut L, question_id: &str) -> Result<Bounty, Error>
where
    L: Ledger,
{
    ledger
        .get_bounty(question_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("bounty on question {}", question_id)))
}

pub async fn add_bounty<S, L>(store: &mut S, ledger: &mut L, question_id: &str, username: &str, amount: u32) -> Result<Bounty, Error>
where
    S: Store,
    L: Ledger,
{
    if !(MIN_BOUNTY..=MAX_BOUNTY).contains(&amount) {
        return Err(Error::BusinessError(format!("bounty must be between {} and {} points", MIN_BOUNTY, MAX_BOUNTY)));
    }
    if ledger.get_bounty(question_id).await?.is_some() {
        return Err(Error::BusinessError("question already has a bounty".into()));
    }
    // make sure the question exists before charging anyone
    QuestionCommon::get(store, question_id).await?;
    let user = UserCommon::get(store, username).await?;
    if user.points - (amount as i64) < MIN_REMAINING_POINTS {
        return Err(Error::BusinessError(format!("at least {} points must remain after adding a bounty", MIN_REMAINING_POINTS)));
    }
    Reputation::new(store).apply(&PointsChange::new(username, -(amount as i64))).await?;
    let bounty = Bounty {
        question_id: question_id.to_owned(),
        amount,
        added_by: username.to_owned(),
        created_at: Utc::now(),
        awarded_to: None,
        awarded_at: None,
    };
    ledger.put_bounty(bounty.clone()).await?;
    info!("{} put a {} point bounty on question {}", username, amount, question_id);
    Ok(bounty)
}

pub async fn award_bounty<S, L>(store: &mut S, ledger: &mut L, question_id: &str, username: &str, answer_id: &str) -> Result<Bounty, Error>
where
    S: Store,
    L: Ledger,
{
    let mut bounty = bounty_detail(ledger, question_id).await?;
    if bounty.added_by != username {
        return Err(Error::Unauthorized);
    }
    if bounty.is_awarded() {
        return Err(Error::BusinessError("bounty has already been awarded".into()));
    }
    let answer = AnswerCommon::get(store, question_id, answer_id).await?;
    if answer.creator == username {
        return Err(Error::BusinessError("cannot award a bounty to yourself".into()));
    }
    Reputation::new(store).apply(&PointsChange::new(answer.creator.clone(), bounty.amount as i64)).await?;
    bounty.awarded_to = Some(answer.creator);
    bounty.awarded_at = Some(Utc::now());
    ledger.put_bounty(bounty.clone()).await?;
    info!("bounty on question {} awarded to answer {}", question_id, answer_id);
    Ok(bounty)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::testing::FakeApi;
    use crate::impls::ledger::memory::MemoryLedger;

    fn setup() -> (FakeApi, MemoryLedger) {
        let api = FakeApi::default();
        api.add_question("q1", "alice");
        api.add_answer("q1", "a1", "bob");
        api.add_answer("q1", "a2", "alice");
        api.add_user("alice", 300);
        api.add_user("bob", 20);
        (api, MemoryLedger::new())
    }

    #[tokio::test]
    async fn test_amount_bounds() {
        let (mut api, mut ledger) = setup();
        assert!(add_bounty(&mut api, &mut ledger, "q1", "alice", 74).await.is_err());
        assert!(add_bounty(&mut api, &mut ledger, "q1", "alice", 501).await.is_err());
        // 300 - 226 leaves 74
        assert!(add_bounty(&mut api, &mut ledger, "q1", "alice", 226).await.is_err());
        assert_eq!(api.points("alice"), 300);
        let bounty = add_bounty(&mut api, &mut ledger, "q1", "alice", 225).await.unwrap();
        assert_eq!(bounty.amount, 225);
        assert_eq!(api.points("alice"), 75);
        assert!(add_bounty(&mut api, &mut ledger, "q1", "alice", 75).await.is_err());
    }

    #[tokio::test]
    async fn test_award_once() {
        let (mut api, mut ledger) = setup();
        add_bounty(&mut api, &mut ledger, "q1", "alice", 100).await.unwrap();
        assert!(matches!(award_bounty(&mut api, &mut ledger, "q1", "bob", "a1").await, Err(Error::Unauthorized)));
        assert!(award_bounty(&mut api, &mut ledger, "q1", "alice", "a2").await.is_err());
        let bounty = award_bounty(&mut api, &mut ledger, "q1", "alice", "a1").await.unwrap();
        assert_eq!(bounty.awarded_to.as_deref(), Some("bob"));
        assert_eq!(api.points("bob"), 120);
        assert!(award_bounty(&mut api, &mut ledger, "q1", "alice", "a1").await.is_err());
        assert_eq!(api.points("bob"), 120);
    }
}
