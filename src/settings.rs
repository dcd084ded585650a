//! Environment configuration, read once at process start.

use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for environment variable {0}: {1}")]
    Invalid(&'static str, String),
}

/// Process-wide settings. `API_URL` and `API_KEY` point at the hosted
/// Supabase project; startup fails loudly if either is absent.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub api_key: String,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_url =
            std::env::var("API_URL").map_err(|_| SettingsError::Missing("API_URL"))?;
        let api_key =
            std::env::var("API_KEY").map_err(|_| SettingsError::Missing("API_KEY"))?;
        let port = parse_port(std::env::var("PORT").ok())?;
        Ok(Self {
            api_url,
            api_key,
            port,
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, SettingsError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| SettingsError::Invalid("PORT", value)),
    }
}
