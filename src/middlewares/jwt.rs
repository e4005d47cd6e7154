use serde::{Deserialize, Serialize};

use crate::actix_web::{
    dev::{Service, ServiceRequest, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use crate::context::UserInfo;
use crate::core::tokener::{Payload, Tokener};
use crate::impls::tokener::jwt::JWT;
use log::warn;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug, Deserialize, Serialize)]
pub struct Claim {
    pub user: String,
    pub exp: i64,
}

impl Payload for Claim {
    fn user(&self) -> &str {
        &self.user
    }
}

pub(crate) struct JWTMiddleware {
    secret: Vec<u8>,
}

impl JWTMiddleware {
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }
}

impl<S> Transform<S, ServiceRequest> for JWTMiddleware
where
    S: Service<ServiceRequest> + 'static,
    S::Future: 'static,
    S::Error: Into<Error>,
{
    type Error = Error;
    type Response = S::Response;
    type Transform = JWTService<S>;
    type InitError = ();
    type Future = Pin<Box<dyn Future<Output = Result<Self::Transform, Self::InitError>>>>;
    fn new_transform(&self, service: S) -> Self::Future {
        let secret = self.secret.clone();
        Box::pin(async move {
            Ok(JWTService {
                tokener: JWT::new(secret),
                next_service: service,
            })
        })
    }
}

pub struct JWTService<S> {
    tokener: JWT,
    next_service: S,
}

impl<S> Service<ServiceRequest> for JWTService<S>
where
    S: Service<ServiceRequest>,
    S::Future: 'static,
    S::Error: Into<Error>,
{
    type Response = S::Response;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    fn poll_ready(&self, ctx: &mut std::task::Context<'_>) -> std::task::Poll<Result<(), Self::Error>> {
        self.next_service.poll_ready(ctx).map_err(|e| e.into())
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let header = match req.headers().get(AUTHORIZATION) {
            None => return Box::pin(async move { Err(ErrorUnauthorized("no token in header")) }),
            Some(header) => header.to_owned(),
        };
        match header.to_str() {
            Err(e) => return Box::pin(async move { Err(ErrorUnauthorized(e)) }),
            Ok(value) => {
                let token = value.strip_prefix("Bearer ").or_else(|| value.strip_prefix("bearer ")).unwrap_or(value);
                match <JWT as Tokener<Claim>>::verify_token(&self.tokener, token) {
                    Err(e) => {
                        warn!("rejected token: {}", e);
                        return Box::pin(async move { Err(ErrorUnauthorized(e)) });
                    }
                    Ok(claim) => {
                        req.extensions_mut().insert(UserInfo { username: claim.user });
                    }
                }
            }
        }

        let res_fut = self.next_service.call(req);
        Box::pin(async move {
            let resp = res_fut.await.map_err(|e| e.into())?;
            Ok(resp)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::actix_web::{http::StatusCode, test, web, App};
    use chrono::{Duration, Utc};

    async fn whoami(user_info: UserInfo) -> String {
        user_info.username
    }

    #[actix_web::test]
    async fn test_username_reaches_handler() {
        let secret = b"moderation-secret".to_vec();
        let token = JWT::new(secret.clone())
            .gen_token(&Claim {
                user: "alice".into(),
                exp: (Utc::now() + Duration::hours(1)).timestamp(),
            })
            .unwrap();
        let app = test::init_service(App::new().wrap(JWTMiddleware::new(secret)).route("/me", web::get().to(whoami))).await;
        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "alice");
    }

    #[actix_web::test]
    async fn test_missing_token_rejected() {
        let app = test::init_service(App::new().wrap(JWTMiddleware::new(b"s".to_vec())).route("/me", web::get().to(whoami))).await;
        let req = test::TestRequest::get().uri("/me").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
    }
}
