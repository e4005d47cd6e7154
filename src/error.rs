use crate::actix_web::http::StatusCode;
use crate::actix_web::{HttpResponse, ResponseError};
use crate::dotenv::Error as DotError;
use crate::jsonwebtoken::errors::Error as JsonWebTokenError;
use crate::thiserror::Error as ThisError;
use serde_json::json;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("dotenv error")]
    DotEnvError(#[from] DotError),

    #[error("jwt error")]
    JWTError(#[from] JsonWebTokenError),

    #[error("you already voted on this subject")]
    AlreadyVoted,

    #[error("you have not voted on this subject")]
    NotVoted,

    #[error("previous vote was {0}, not the one being undone")]
    VoteMismatch(String),

    #[error("you already cast a {0} vote on this question")]
    AlreadyBalloted(String),

    #[error("a {0} vote is already in progress")]
    VoteInProgress(String),

    #[error("cannot vote {kind} while question is {status}")]
    InvalidTransition { status: String, kind: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bussiness error: {0}")]
    BusinessError(String),

    #[error("unauthorized")]
    Unauthorized,
}

impl Error {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api { status, message: message.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::Api { status: 404, .. })
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Http(_) | Error::Api { .. } => StatusCode::BAD_GATEWAY,
            Error::DotEnvError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::JWTError(_) | Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::AlreadyVoted | Error::AlreadyBalloted(_) | Error::VoteInProgress(_) => StatusCode::CONFLICT,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::NotVoted | Error::VoteMismatch(_) | Error::InvalidTransition { .. } | Error::BusinessError(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "success": false, "error": self.to_string() }))
    }
}
