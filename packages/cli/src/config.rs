use std::env;
use std::num::ParseIntError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub store_timeout: Duration,
    pub verbose_errors: bool,
}

impl Config {
    /// Credentials have no fallback: startup fails when the Supabase URL
    /// or anon key is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "4000".to_string());

        let port = port_str.parse::<u16>()?;
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let supabase_url = required_var("SUPABASE_URL")?
            .trim_end_matches('/')
            .to_string();
        let supabase_anon_key = required_var("SUPABASE_ANON_KEY")?;

        let timeout_str = env::var("SUPABASE_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string());
        let timeout_secs = timeout_str
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout(timeout_str.clone()))?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(timeout_str));
        }

        let verbose_errors = env::var("VERBOSE_ERRORS")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        Ok(Config {
            port,
            supabase_url,
            supabase_anon_key,
            store_timeout: Duration::from_secs(timeout_secs),
            verbose_errors,
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv(name)),
    }
}
