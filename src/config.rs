//! Environment-driven configuration for the demo driver.

use crate::domain::value_objects::{BookId, UserId};
use thiserror::Error;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "rusty_library_top_down=debug";
pub const LOG_FILTER_ENV: &str = "RUST_LOG";
pub const DENIED_USERS_ENV: &str = "LIBRARY_DENIED_USERS";
pub const SCENARIOS_ENV: &str = "LIBRARY_SCENARIOS";

const DEFAULT_DENIED_USERS: &str = "0";
const DEFAULT_SCENARIOS: &str = "1:2,0:2,1:3";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An entry could not be parsed as an integer ID
    #[error("{var}: invalid id `{value}`")]
    InvalidId { var: &'static str, value: String },

    /// A scenario entry was not in `user:book` form
    #[error("{var}: expected `user:book`, got `{value}`")]
    MalformedPair { var: &'static str, value: String },
}

/// Environment lookup, so tests can supply values without touching the
/// process environment.
pub trait ConfigEnv {
    fn string(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigEnv for ProcessEnv {
    fn string(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Settings for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_filter: String,
    /// Users the authorization stub rejects.
    pub denied_users: Vec<UserId>,
    /// `(user, book)` pairs to run through the loan service, in order.
    pub scenarios: Vec<(UserId, BookId)>,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(&ProcessEnv)
    }

    /// Load configuration from the given environment.
    ///
    /// Blank variables fall back to their defaults.
    pub fn load(env: &impl ConfigEnv) -> Result<Self, ConfigError> {
        let log_filter = lookup(env, LOG_FILTER_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        let denied_users = match lookup(env, DENIED_USERS_ENV) {
            Some(raw) => parse_ids(DENIED_USERS_ENV, &raw)?,
            None => parse_ids(DENIED_USERS_ENV, DEFAULT_DENIED_USERS)?,
        }
        .into_iter()
        .map(UserId::new)
        .collect();

        let scenarios = match lookup(env, SCENARIOS_ENV) {
            Some(raw) => parse_scenarios(SCENARIOS_ENV, &raw)?,
            None => parse_scenarios(SCENARIOS_ENV, DEFAULT_SCENARIOS)?,
        };

        Ok(Self {
            log_filter,
            denied_users,
            scenarios,
        })
    }
}

fn lookup(env: &impl ConfigEnv, name: &str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

fn parse_id(var: &'static str, value: &str) -> Result<i64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidId {
        var,
        value: value.trim().to_owned(),
    })
}

fn parse_ids(var: &'static str, raw: &str) -> Result<Vec<i64>, ConfigError> {
    entries(raw).map(|entry| parse_id(var, entry)).collect()
}

fn parse_scenarios(var: &'static str, raw: &str) -> Result<Vec<(UserId, BookId)>, ConfigError> {
    entries(raw)
        .map(|entry| {
            let (user, book) = entry
                .split_once(':')
                .ok_or_else(|| ConfigError::MalformedPair {
                    var,
                    value: entry.to_owned(),
                })?;
            Ok((
                UserId::new(parse_id(var, user)?),
                BookId::new(parse_id(var, book)?),
            ))
        })
        .collect()
}
