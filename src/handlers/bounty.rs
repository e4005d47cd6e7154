use crate::actix_web::web::{Json, Path};
use crate::context::UserInfo;
use crate::core::models::bounty::{Award, Bounty, Create};
use crate::core::services::bounty;
use crate::error::Error;
use crate::handlers::{Api, Books};

pub async fn detail(path: Path<(String,)>, ledger: Books) -> Result<Json<Bounty>, Error> {
    let (question_id,) = path.into_inner();
    let mut ledger = ledger.get_ref().clone();
    Ok(Json(bounty::bounty_detail(&mut ledger, &question_id).await?))
}

pub async fn create(user_info: UserInfo, path: Path<(String,)>, Json(Create { amount }): Json<Create>, api: Api, ledger: Books) -> Result<Json<Bounty>, Error> {
    let (question_id,) = path.into_inner();
    let mut api = api.get_ref().clone();
    let mut ledger = ledger.get_ref().clone();
    let bounty = bounty::add_bounty(&mut api, &mut ledger, &question_id, &user_info.username, amount).await?;
    Ok(Json(bounty))
}

pub async fn award(user_info: UserInfo, path: Path<(String,)>, Json(Award { answer_id }): Json<Award>, api: Api, ledger: Books) -> Result<Json<Bounty>, Error> {
    let (question_id,) = path.into_inner();
    let mut api = api.get_ref().clone();
    let mut ledger = ledger.get_ref().clone();
    let bounty = bounty::award_bounty(&mut api, &mut ledger, &question_id, &user_info.username, &answer_id).await?;
    Ok(Json(bounty))
}
