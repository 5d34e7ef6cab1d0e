//! Runtime configuration.
//!
//! Read from `ASSISTANT_*` environment variables. The binary loads a `.env` file
//! first, so values can live there during development.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::actors::TypingPacing;
use crate::brain::MatchMode;
use crate::error::AppError;
use crate::telemetry::LogFormat;

pub const ENV_TYPING_MS_PER_CHAR: &str = "ASSISTANT_TYPING_MS_PER_CHAR";
pub const ENV_TYPING_MIN_MS: &str = "ASSISTANT_TYPING_MIN_MS";
pub const ENV_TYPING_MAX_MS: &str = "ASSISTANT_TYPING_MAX_MS";
pub const ENV_MATCH_MODE: &str = "ASSISTANT_MATCH_MODE";
pub const ENV_LOG_FORMAT: &str = "ASSISTANT_LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "ASSISTANT_LOG_LEVEL";

/// Settings for the assistant and its terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_typing_bounds"))]
pub struct AssistantConfig {
    /// Milliseconds of simulated typing per UTF-16 unit of reply.
    #[validate(range(max = 1000))]
    pub typing_ms_per_char: u64,
    /// Shortest typing delay.
    #[validate(range(max = 60000))]
    pub typing_min_ms: u64,
    /// Longest typing delay. Must not be below `typing_min_ms`.
    #[validate(range(max = 60000))]
    pub typing_max_ms: u64,
    /// Keyword containment used by the classifier and the response selector.
    pub match_mode: MatchMode,
    pub log_format: LogFormat,
    /// Default `tracing` filter, overridden by `RUST_LOG`.
    #[validate(length(min = 1))]
    pub log_level: String,
}

fn validate_typing_bounds(config: &AssistantConfig) -> Result<(), ValidationError> {
    if config.typing_min_ms > config.typing_max_ms {
        return Err(ValidationError::new("typing_min_above_max"));
    }
    Ok(())
}

impl Default for AssistantConfig {
    fn default() -> Self {
        let pacing = TypingPacing::default();
        Self {
            typing_ms_per_char: pacing.per_char_ms,
            typing_min_ms: pacing.min_ms,
            typing_max_ms: pacing.max_ms,
            match_mode: MatchMode::default(),
            log_format: LogFormat::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AssistantConfig {
    /// Builds the configuration from the environment, falling back to defaults for
    /// unset variables, then validates it.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            typing_ms_per_char: env_or(ENV_TYPING_MS_PER_CHAR, defaults.typing_ms_per_char)?,
            typing_min_ms: env_or(ENV_TYPING_MIN_MS, defaults.typing_min_ms)?,
            typing_max_ms: env_or(ENV_TYPING_MAX_MS, defaults.typing_max_ms)?,
            match_mode: env_or(ENV_MATCH_MODE, defaults.match_mode)?,
            log_format: env_or(ENV_LOG_FORMAT, defaults.log_format)?,
            log_level: env::var(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn pacing(&self) -> TypingPacing {
        TypingPacing {
            per_char_ms: self.typing_ms_per_char,
            min_ms: self.typing_min_ms,
            max_ms: self.typing_max_ms,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
        Err(_) => Ok(default),
    }
}
