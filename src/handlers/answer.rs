use crate::actix_web::web::{Json, Path};
use crate::context::UserInfo;
use crate::core::models::answer::{Answer, Submit};
use crate::core::services::answer;
use crate::error::Error;
use crate::handlers::{Api, Books};
use crate::response::Success;

pub async fn create(user_info: UserInfo, path: Path<(String,)>, Json(Submit { text }): Json<Submit>, api: Api) -> Result<Json<Answer>, Error> {
    let (question_id,) = path.into_inner();
    let mut api = api.get_ref().clone();
    let answer = answer::create_answer(&mut api, &question_id, &user_info.username, text).await?;
    Ok(Json(answer))
}

pub async fn accept(user_info: UserInfo, path: Path<(String, String)>, api: Api, ledger: Books) -> Result<Json<Success>, Error> {
    let (question_id, answer_id) = path.into_inner();
    let mut api = api.get_ref().clone();
    let mut ledger = ledger.get_ref().clone();
    answer::accept_answer(&mut api, &mut ledger, &question_id, &answer_id, &user_info.username).await?;
    Ok(Json(Success::new()))
}
