use crate::core::models::vote::{Operation, Subject, VoteCast, VoteDirection, VotePatch, VoteRecord};
use crate::core::ports::repository::{AnswerCommon, QuestionCommon, Store, VoteCommon};
use crate::core::reputation::VoteObserver;
use crate::error::Error;
use log::{info, warn};

pub async fn has_voted<S>(store: &mut S, subject: &Subject, username: &str) -> Result<Option<VoteRecord>, Error>
where
    S: Store,
{
    VoteCommon::get_vote(store, subject, username).await
}

async fn creator_of<S>(store: &mut S, subject: &Subject) -> Result<Option<String>, Error>
where
    S: Store,
{
    let creator = match subject {
        Subject::Question { question_id } => Some(QuestionCommon::get(store, question_id).await?.creator),
        Subject::Answer { question_id, answer_id } => Some(AnswerCommon::get(store, question_id, answer_id).await?.creator),
        Subject::Comment { .. } => None,
    };
    Ok(creator)
}

pub async fn cast_vote<S, O>(store: &mut S, observer: &mut O, subject: &Subject, username: &str, direction: VoteDirection) -> Result<(), Error>
where
    S: Store,
    O: VoteObserver,
{
    if let Some(prev) = has_voted(store, subject, username).await? {
        warn!("{} already voted {} on {}", username, prev.target, subject);
        return Err(Error::AlreadyVoted);
    }
    let creator = creator_of(store, subject).await?;
    VoteCommon::update_vote(
        store,
        subject,
        username,
        VotePatch {
            operation: Operation::Increment,
            target: direction,
        },
    )
    .await?;
    info!("{} voted {} on {}", username, direction, subject);
    observer
        .on_vote_cast(&VoteCast {
            subject: subject.kind(),
            creator,
            voter: username.to_owned(),
            direction,
        })
        .await?;
    Ok(())
}

pub async fn undo_vote<S>(store: &mut S, subject: &Subject, username: &str, previous: VoteDirection) -> Result<(), Error>
where
    S: Store,
{
    match has_voted(store, subject, username).await? {
        None => return Err(Error::NotVoted),
        Some(record) if record.target != previous => return Err(Error::VoteMismatch(record.target.to_string())),
        Some(_) => {}
    }
    VoteCommon::update_vote(
        store,
        subject,
        username,
        VotePatch {
            operation: Operation::Decrement,
            target: previous,
        },
    )
    .await?;
    info!("{} withdrew {} on {}", username, previous, subject);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::reputation::Reputation;
    use crate::core::testing::FakeApi;

    fn seeded() -> FakeApi {
        let api = FakeApi::default();
        api.add_question("Q3", "carol");
        api.add_user("carol", 100);
        api.add_user("alice", 100);
        api
    }

    #[tokio::test]
    async fn test_upvote_awards_creator_and_blocks_second_vote() {
        let mut api = seeded();
        let mut users = api.clone();
        let mut rep = Reputation::new(&mut users);
        let subject = Subject::question("Q3");

        cast_vote(&mut api, &mut rep, &subject, "alice", VoteDirection::Up).await.unwrap();
        assert_eq!(api.tally(&subject), (1, 0));
        assert_eq!(api.points("carol"), 105);
        assert_eq!(api.points("alice"), 100);

        let err = cast_vote(&mut api, &mut rep, &subject, "alice", VoteDirection::Up).await.unwrap_err();
        assert!(matches!(err, Error::AlreadyVoted));
        let err = cast_vote(&mut api, &mut rep, &subject, "alice", VoteDirection::Down).await.unwrap_err();
        assert!(matches!(err, Error::AlreadyVoted));
        assert_eq!(api.tally(&subject), (1, 0));
        assert_eq!(api.points("carol"), 105);
    }

    #[tokio::test]
    async fn test_question_downvote_costs_both() {
        let mut api = seeded();
        let mut users = api.clone();
        let mut rep = Reputation::new(&mut users);
        let subject = Subject::question("Q3");
        cast_vote(&mut api, &mut rep, &subject, "alice", VoteDirection::Down).await.unwrap();
        assert_eq!(api.tally(&subject), (0, 1));
        assert_eq!(api.points("carol"), 99);
        assert_eq!(api.points("alice"), 99);
    }

    #[tokio::test]
    async fn test_answer_votes() {
        let mut api = seeded();
        api.add_answer("Q3", "A1", "dave");
        api.add_user("dave", 0);
        let mut users = api.clone();
        let mut rep = Reputation::new(&mut users);
        let subject = Subject::answer("Q3", "A1");
        cast_vote(&mut api, &mut rep, &subject, "alice", VoteDirection::Down).await.unwrap();
        assert_eq!(api.points("dave"), 10);
        assert_eq!(api.points("alice"), 99);
    }

    #[tokio::test]
    async fn test_comment_votes_are_guarded() {
        let mut api = seeded();
        let mut users = api.clone();
        let mut rep = Reputation::new(&mut users);
        let subject = Subject::comment("Q3", "C1");
        cast_vote(&mut api, &mut rep, &subject, "alice", VoteDirection::Up).await.unwrap();
        assert!(cast_vote(&mut api, &mut rep, &subject, "alice", VoteDirection::Up).await.is_err());
        assert_eq!(api.tally(&subject), (1, 0));
        assert_eq!(api.points("alice"), 100);
    }

    #[tokio::test]
    async fn test_undo_clears_guard() {
        let mut api = seeded();
        let mut users = api.clone();
        let mut rep = Reputation::new(&mut users);
        let subject = Subject::question("Q3");
        cast_vote(&mut api, &mut rep, &subject, "alice", VoteDirection::Up).await.unwrap();

        let err = undo_vote(&mut api, &subject, "alice", VoteDirection::Down).await.unwrap_err();
        assert!(matches!(err, Error::VoteMismatch(_)));

        undo_vote(&mut api, &subject, "alice", VoteDirection::Up).await.unwrap();
        assert_eq!(api.tally(&subject), (0, 0));
        assert!(has_voted(&mut api, &subject, "alice").await.unwrap().is_none());
        // points are not reversed
        assert_eq!(api.points("carol"), 105);

        cast_vote(&mut api, &mut rep, &subject, "alice", VoteDirection::Down).await.unwrap();
        assert_eq!(api.tally(&subject), (0, 1));
    }

    #[tokio::test]
    async fn test_undo_without_vote() {
        let mut api = seeded();
        let err = undo_vote(&mut api, &Subject::question("Q3"), "alice", VoteDirection::Up).await.unwrap_err();
        assert!(matches!(err, Error::NotVoted));
    }

    #[tokio::test]
    async fn test_failed_vote_changes_nothing() {
        let mut api = seeded();
        api.fail_votes(true);
        let mut users = api.clone();
        let mut rep = Reputation::new(&mut users);
        let subject = Subject::question("Q3");
        assert!(cast_vote(&mut api, &mut rep, &subject, "alice", VoteDirection::Up).await.is_err());
        assert_eq!(api.tally(&subject), (0, 0));
        assert_eq!(api.points("carol"), 100);
    }
}
