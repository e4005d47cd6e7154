use crate::actix_web::web::{Json, Path};
use crate::core::models::user::Profile;
use crate::core::services::user;
use crate::error::Error;
use crate::handlers::Api;

pub async fn profile(path: Path<(String,)>, api: Api) -> Result<Json<Profile>, Error> {
    let (username,) = path.into_inner();
    let mut api = api.get_ref().clone();
    Ok(Json(user::user_profile(&mut api, &username).await?))
}
