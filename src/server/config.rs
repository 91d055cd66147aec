use std::fmt;
use std::str::FromStr;

use crate::server::error::config::ConfigError;

/// Runtime configuration read from the environment.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    /// How many squad assembly jobs one worker processes concurrently.
    pub workers: usize,
    /// Budget every new team starts with.
    pub starting_budget: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            workers: parse_env_or("WORKERS", 4)?,
            starting_budget: parse_env_or("STARTING_BUDGET", 5_000_000.0)?,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

/// Reads an optional variable, falling back to `default` when unset but
/// refusing to start on a value that is set and unparseable.
fn parse_env_or<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|err: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: err.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
