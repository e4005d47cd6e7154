use crate::actix_web::web::{Json, Path};
use crate::context::UserInfo;
use crate::core::models::question::{Snapshot, StatusVoteKind};
use crate::core::services::{question, status};
use crate::error::Error;
use crate::handlers::{Api, Books};
use crate::serde::Deserialize;

pub async fn detail(path: Path<(String,)>, api: Api, ledger: Books) -> Result<Json<Snapshot>, Error> {
    let (question_id,) = path.into_inner();
    let mut api = api.get_ref().clone();
    let mut ledger = ledger.get_ref().clone();
    let snapshot = question::refresh_question(&mut api, &mut ledger, &question_id).await?;
    Ok(Json(snapshot))
}

#[derive(Debug, Deserialize)]
pub struct StatusVote {
    kind: StatusVoteKind,
}

pub async fn status_vote(
    user_info: UserInfo,
    path: Path<(String,)>,
    Json(StatusVote { kind }): Json<StatusVote>,
    api: Api,
    ledger: Books,
) -> Result<Json<Snapshot>, Error> {
    let (question_id,) = path.into_inner();
    let mut api = api.get_ref().clone();
    let mut ledger = ledger.get_ref().clone();
    let snapshot = status::cast_status_vote(&mut api, &mut ledger, &question_id, &user_info.username, kind).await?;
    Ok(Json(snapshot))
}
