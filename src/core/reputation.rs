use crate::core::models::{
    user::PointsChange,
    vote::{SubjectKind, VoteCast, VoteDirection},
};
use crate::core::ports::repository::UserCommon;
use crate::error::Error;
use log::{error, info};

/// Points awarded to an answer's author when it is posted.
pub const ANSWER_POSTED_POINTS: i64 = 2;

pub trait VoteObserver {
    async fn on_vote_cast(&mut self, event: &VoteCast) -> Result<(), Error>;
}

pub fn points_for(event: &VoteCast) -> Vec<PointsChange> {
    let (creator_delta, voter_delta) = match (event.subject, event.direction) {
        (SubjectKind::Question, VoteDirection::Up) => (5, 0),
        (SubjectKind::Question, VoteDirection::Down) => (-1, -1),
        (SubjectKind::Answer, VoteDirection::Up) => (10, 0),
        (SubjectKind::Answer, VoteDirection::Down) => (10, -1),
        (SubjectKind::Comment, _) => (0, 0),
    };
    let mut changes = Vec::new();
    if let Some(creator) = &event.creator {
        if creator_delta != 0 {
            changes.push(PointsChange::new(creator.clone(), creator_delta));
        }
    }
    if voter_delta != 0 {
        changes.push(PointsChange::new(event.voter.clone(), voter_delta));
    }
    changes
}

/// Applies the points table through the remote users API.
pub struct Reputation<'a, U> {
    users: &'a mut U,
}

impl<'a, U> Reputation<'a, U>
where
    U: UserCommon,
{
    pub fn new(users: &'a mut U) -> Self {
        Self { users }
    }

    pub async fn apply(&mut self, change: &PointsChange) -> Result<(), Error> {
        UserCommon::update_points(self.users, &change.username, change.patch()).await
    }
}

impl<'a, U> VoteObserver for Reputation<'a, U>
where
    U: UserCommon,
{
    async fn on_vote_cast(&mut self, event: &VoteCast) -> Result<(), Error> {
        for change in points_for(event) {
            info!("points {:+} for {}", change.delta, change.username);
            if let Err(e) = self.apply(&change).await {
                // the vote itself is already recorded upstream
                error!("failed to apply points for {}: {}", change.username, e);
            }
        }
        Ok(())
    }
}
