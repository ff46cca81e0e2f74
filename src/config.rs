use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is invalid ('{value}'): {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: String,
    pub workers: usize,
    pub carousel_interval: Duration,
    pub carousel_transition: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "listify.sqlite3".to_string(),
            workers: 4,
            carousel_interval: Duration::from_millis(5000),
            carousel_transition: Duration::from_millis(500),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    /// Unset variables fall back to [`Config::default`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let addr = parse_var(&lookup, "LISTIFY_ADDR")?.unwrap_or(defaults.addr);
        let db_path = lookup("LISTIFY_DB_PATH").unwrap_or(defaults.db_path);
        let workers = parse_var(&lookup, "LISTIFY_WORKERS")?.unwrap_or(defaults.workers);
        let interval_ms: Option<u64> = parse_var(&lookup, "LISTIFY_CAROUSEL_INTERVAL_MS")?;
        let transition_ms: Option<u64> = parse_var(&lookup, "LISTIFY_CAROUSEL_TRANSITION_MS")?;

        if workers == 0 {
            return Err(ConfigError::Invalid {
                var: "LISTIFY_WORKERS",
                value: "0".into(),
                reason: "at least one worker is required".into(),
            });
        }

        Ok(Self {
            addr,
            db_path,
            workers,
            carousel_interval: interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.carousel_interval),
            carousel_transition: transition_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.carousel_transition),
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            }),
    }
}
