use std::net::SocketAddr;

use thiserror::Error;

use dapur_llm::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// PORT defaults to 3001 and DAPUR_BIND_HOST to 0.0.0.0.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3001".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT", "must be a valid port number"))?;

        let host = lookup("DAPUR_BIND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let listen_addr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::Invalid("DAPUR_BIND_HOST", "must be a valid IP address"))?;

        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let openai_model = lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let openai_base_url =
            lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Config {
            listen_addr,
            openai_api_key,
            openai_model,
            openai_base_url,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
