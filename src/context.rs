use crate::actix_web::{FromRequest, HttpMessage};
use crate::actix_web::{self, Error};
use std::future::{ready, Ready};

/// The authenticated caller, placed in the request by the JWT middleware.
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub username: String,
}

impl FromRequest for UserInfo {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &actix_web::HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        if let Some(user) = req.extensions().get::<Self>() {
            ready(Ok(user.clone()))
        } else {
            ready(Err(actix_web::error::ErrorUnauthorized("")))
        }
    }
}
