use crate::actix_web::web::{Json, Path};
use crate::context::UserInfo;
use crate::core::models::vote::{Subject, VoteCreate, VoteState};
use crate::core::reputation::Reputation;
use crate::core::services::vote;
use crate::error::Error;
use crate::handlers::Api;
use crate::impls::repository::qoverflow::QOverflow;
use crate::response::Success;

fn nested_subject(question_id: String, collection: &str, id: String) -> Result<Subject, Error> {
    match collection {
        "answers" => Ok(Subject::answer(question_id, id)),
        "comments" => Ok(Subject::comment(question_id, id)),
        other => Err(Error::NotFound(other.to_owned())),
    }
}

async fn state(user_info: UserInfo, subject: Subject, api: Api) -> Result<Json<VoteState>, Error> {
    let mut api = api.get_ref().clone();
    let record = vote::has_voted(&mut api, &subject, &user_info.username).await?;
    Ok(Json(record.into()))
}

async fn cast(user_info: UserInfo, subject: Subject, body: VoteCreate, api: Api) -> Result<Json<Success>, Error> {
    let mut store: QOverflow = api.get_ref().clone();
    let mut users = api.get_ref().clone();
    let mut reputation = Reputation::new(&mut users);
    vote::cast_vote(&mut store, &mut reputation, &subject, &user_info.username, body.direction).await?;
    Ok(Json(Success::new()))
}

async fn undo(user_info: UserInfo, subject: Subject, api: Api) -> Result<Json<Success>, Error> {
    let mut api = api.get_ref().clone();
    let record = vote::has_voted(&mut api, &subject, &user_info.username).await?.ok_or(Error::NotVoted)?;
    vote::undo_vote(&mut api, &subject, &user_info.username, record.target).await?;
    Ok(Json(Success::new()))
}

pub async fn question_state(user_info: UserInfo, path: Path<(String,)>, api: Api) -> Result<Json<VoteState>, Error> {
    let (question_id,) = path.into_inner();
    state(user_info, Subject::question(question_id), api).await
}

pub async fn question_cast(user_info: UserInfo, path: Path<(String,)>, Json(body): Json<VoteCreate>, api: Api) -> Result<Json<Success>, Error> {
    let (question_id,) = path.into_inner();
    cast(user_info, Subject::question(question_id), body, api).await
}

pub async fn question_undo(user_info: UserInfo, path: Path<(String,)>, api: Api) -> Result<Json<Success>, Error> {
    let (question_id,) = path.into_inner();
    undo(user_info, Subject::question(question_id), api).await
}

pub async fn nested_state(user_info: UserInfo, path: Path<(String, String, String)>, api: Api) -> Result<Json<VoteState>, Error> {
    let (question_id, collection, id) = path.into_inner();
    state(user_info, nested_subject(question_id, &collection, id)?, api).await
}

pub async fn nested_cast(
    user_info: UserInfo,
    path: Path<(String, String, String)>,
    Json(body): Json<VoteCreate>,
    api: Api,
) -> Result<Json<Success>, Error> {
    let (question_id, collection, id) = path.into_inner();
    cast(user_info, nested_subject(question_id, &collection, id)?, body, api).await
}

pub async fn nested_undo(user_info: UserInfo, path: Path<(String, String, String)>, api: Api) -> Result<Json<Success>, Error> {
    let (question_id, collection, id) = path.into_inner();
    undo(user_info, nested_subject(question_id, &collection, id)?, api).await
}
