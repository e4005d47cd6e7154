use crate::dotenv;
use crate::error::Error;
use std::time::Duration;

pub static QOVERFLOW_API_URL: &str = "QOVERFLOW_API_URL";
pub static QOVERFLOW_API_KEY: &str = "QOVERFLOW_API_KEY";
pub static JWT_SECRET: &str = "JWT_SECRET";
pub static BIND_ADDR: &str = "BIND_ADDR";
pub static API_TIMEOUT_SECS: &str = "API_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "https://qoverflow.api.hscc.bdpa.org/v1";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub jwt_secret: Vec<u8>,
    pub bind_addr: String,
    pub api_timeout: Duration,
}

impl Config {
    /// Reads the process environment, after `.env` has been loaded.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| Error::BusinessError(format!("environment variable {} not been set", key)));
        let api_timeout = match lookup(API_TIMEOUT_SECS) {
            Some(v) => v
                .parse::<u64>()
                .map_err(|e| Error::BusinessError(format!("invalid {}: {}", API_TIMEOUT_SECS, e)))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            api_url: lookup(QOVERFLOW_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            api_key: required(QOVERFLOW_API_KEY)?,
            jwt_secret: required(JWT_SECRET)?.into_bytes(),
            bind_addr: lookup(BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            api_timeout: Duration::from_secs(api_timeout),
        })
    }
}
