use std::env;
use std::net::SocketAddr;

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| ApiError::Config("RIOT_API_KEY must be set".into()))?;

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
            .parse()
            .map_err(|_| ApiError::Config("BIND_ADDR is not a valid socket address".into()))?;

        Ok(Self {
            riot_api_key,
            bind_addr,
        })
    }
}
