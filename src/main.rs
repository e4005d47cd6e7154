extern crate actix_web;
extern crate chrono;
extern crate dotenv;
extern crate env_logger;
extern crate jsonwebtoken;
extern crate serde;
extern crate serde_json;
extern crate thiserror;
extern crate tokio;

mod config;
mod context;
mod core;
mod error;
mod handlers;
mod impls;
mod middlewares;
mod response;

use actix_web::web::{delete, get, post, put, resource, scope, Data};
use actix_web::HttpServer;
use config::Config;
use impls::ledger::memory::MemoryLedger;
use impls::repository::qoverflow::QOverflow;
use log::info;
use middlewares::jwt::JWTMiddleware;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::from_env()?;
    let api = QOverflow::new(&config.api_url, &config.api_key, config.api_timeout)?;
    let ledger = MemoryLedger::new();
    info!("forwarding to {}, listening on {}", config.api_url, config.bind_addr);
    let secret = config.jwt_secret.clone();
    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(Data::new(api.clone()))
            .app_data(Data::new(ledger.clone()))
            .service(
                scope("")
                    .wrap(JWTMiddleware::new(secret.clone()))
                    .service(
                        scope("questions/{question_id}")
                            .route("", get().to(handlers::question::detail))
                            .route("status_votes", post().to(handlers::question::status_vote))
                            .service(
                                resource("vote")
                                    .route(get().to(handlers::vote::question_state))
                                    .route(post().to(handlers::vote::question_cast))
                                    .route(delete().to(handlers::vote::question_undo)),
                            )
                            .route("answers", post().to(handlers::answer::create))
                            .route("answers/{answer_id}/accepted", put().to(handlers::answer::accept))
                            .service(
                                resource("{collection}/{id}/vote")
                                    .route(get().to(handlers::vote::nested_state))
                                    .route(post().to(handlers::vote::nested_cast))
                                    .route(delete().to(handlers::vote::nested_undo)),
                            )
                            .service(
                                scope("bounty")
                                    .route("", get().to(handlers::bounty::detail))
                                    .route("", post().to(handlers::bounty::create))
                                    .route("award", post().to(handlers::bounty::award)),
                            ),
                    )
                    .service(scope("users").route("{username}", get().to(handlers::user::profile))),
            )
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await?;
    Ok(())
}
