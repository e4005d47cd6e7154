use crate::core::models::user::{level, Profile};
use crate::core::ports::repository::{Store, UserCommon};
use crate::error::Error;

pub async fn user_profile<S>(store: &mut S, username: &str) -> Result<Profile, Error>
where
    S: Store,
{
    let user = UserCommon::get(store, username).await?;
    Ok(Profile {
        level: level(user.points),
        username: user.username,
        points: user.points,
    })
}
