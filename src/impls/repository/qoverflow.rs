use bytes::Bytes;
use crate::core::models::{
    answer::{Accept, Answer, Insert as AnswerInsert},
    question::{Question, QuestionStatus, StatusUpdate},
    user::{PointsPatch, User},
    vote::{Subject, VoteDirection, VotePatch, VoteRecord},
};
use crate::core::ports::repository::{AnswerCommon, QuestionCommon, UserCommon, VoteCommon};
use crate::error::Error;
use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the remote qOverflow API.
#[derive(Debug, Clone)]
pub struct QOverflow {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionBody {
    question: Question,
}

#[derive(Debug, Deserialize)]
struct AnswersBody {
    #[serde(default)]
    answers: Vec<Answer>,
}

#[derive(Debug, Deserialize)]
struct AnswerBody {
    answer: Answer,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    user: User,
}

/// The API has reported prior votes both as a bare string and as a record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteVote {
    Target(VoteDirection),
    Record { target: VoteDirection },
}

#[derive(Debug, Deserialize)]
struct VoteBody {
    #[serde(default)]
    vote: Option<RemoteVote>,
}

impl QOverflow {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, url).header(AUTHORIZATION, format!("bearer {}", self.api_key))
    }

    /// Turns non-2xx responses and `success: false` bodies into errors.
    async fn check(resp: Response) -> Result<(StatusCode, Bytes), Error> {
        let status = resp.status();
        let body = resp.bytes().await?;
        let envelope: Envelope = serde_json::from_slice(&body).unwrap_or(Envelope { success: None, error: None });
        if !status.is_success() || envelope.success == Some(false) {
            let message = envelope.error.unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_owned());
            warn!("api responded {}: {}", status, message);
            return Err(Error::api(status.as_u16(), message));
        }
        Ok((status, body))
    }

    async fn read<T>(resp: Response) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let (status, body) = Self::check(resp).await?;
        serde_json::from_slice(&body).map_err(|e| Error::api(status.as_u16(), format!("malformed response: {}", e)))
    }

    async fn send<B>(&self, method: Method, path: &str, body: &B) -> Result<(), Error>
    where
        B: Serialize,
    {
        let resp = self.request(method, path).json(body).send().await?;
        Self::check(resp).await?;
        Ok(())
    }
}

impl QuestionCommon for QOverflow {
    async fn get(&mut self, question_id: &str) -> Result<Question, Error> {
        let resp = self.request(Method::GET, &format!("questions/{}", question_id)).send().await?;
        Ok(Self::read::<QuestionBody>(resp).await?.question)
    }

    async fn update_status(&mut self, question_id: &str, status: QuestionStatus) -> Result<(), Error> {
        self.send(Method::PATCH, &format!("questions/{}", question_id), &StatusUpdate { status }).await
    }
}

impl VoteCommon for QOverflow {
    async fn get_vote(&mut self, subject: &Subject, username: &str) -> Result<Option<VoteRecord>, Error> {
        let resp = self.request(Method::GET, &format!("{}/vote/{}", subject.path(), username)).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = Self::read::<VoteBody>(resp).await?;
        Ok(body.vote.map(|v| match v {
            RemoteVote::Target(target) | RemoteVote::Record { target } => VoteRecord { target },
        }))
    }

    async fn update_vote(&mut self, subject: &Subject, username: &str, patch: VotePatch) -> Result<(), Error> {
        self.send(Method::PATCH, &format!("{}/vote/{}", subject.path(), username), &patch).await
    }
}

impl AnswerCommon for QOverflow {
    async fn query(&mut self, question_id: &str) -> Result<Vec<Answer>, Error> {
        let resp = self.request(Method::GET, &format!("questions/{}/answers", question_id)).send().await?;
        Ok(Self::read::<AnswersBody>(resp).await?.answers)
    }

    async fn insert(&mut self, question_id: &str, answer: AnswerInsert) -> Result<Answer, Error> {
        let resp = self.request(Method::POST, &format!("questions/{}/answers", question_id)).json(&answer).send().await?;
        Ok(Self::read::<AnswerBody>(resp).await?.answer)
    }

    async fn accept(&mut self, question_id: &str, answer_id: &str) -> Result<(), Error> {
        self.send(Method::PATCH, &format!("questions/{}/answers/{}", question_id, answer_id), &Accept { accepted: true })
            .await
    }
}

impl UserCommon for QOverflow {
    async fn get(&mut self, username: &str) -> Result<User, Error> {
        let resp = self.request(Method::GET, &format!("users/{}", username)).send().await?;
        Ok(Self::read::<UserBody>(resp).await?.user)
    }

    async fn update_points(&mut self, username: &str, patch: PointsPatch) -> Result<(), Error> {
        self.send(Method::PATCH, &format!("users/{}/points", username), &patch).await
    }
}
