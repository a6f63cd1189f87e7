//! Password policy configuration.
//!
//! Handles the enabled criteria, the minimum length and the scoring
//! algorithm, with optional overrides from the environment.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

use crate::scoring::Algorithm;

pub const ENV_MIN_LENGTH: &str = "PWD_MIN_LENGTH";
pub const ENV_REQUIRE_CAPITAL: &str = "PWD_REQUIRE_CAPITAL";
pub const ENV_REQUIRE_NUMERIC: &str = "PWD_REQUIRE_NUMERIC";
pub const ENV_REQUIRE_SPECIAL: &str = "PWD_REQUIRE_SPECIAL";
pub const ENV_ALGORITHM: &str = "PWD_ALGORITHM";

const DEFAULT_MIN_LENGTH: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Minimum length must be a positive integer, got {0:?}")]
    InvalidMinLength(String),
    #[error("Invalid boolean for {var}: {value:?}")]
    InvalidFlag { var: &'static str, value: String },
    #[error("Unknown scoring algorithm: {0:?}")]
    UnknownAlgorithm(String),
}

/// Enabled password criteria and the minimum length threshold.
///
/// The length criterion is always enabled; the character-class criteria are
/// toggled individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub min_length: NonZeroUsize,
    pub capital_letter: bool,
    pub numeric: bool,
    pub special_character: bool,
    pub algorithm: Algorithm,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            capital_letter: true,
            numeric: false,
            special_character: true,
            algorithm: Algorithm::default(),
        }
    }
}

impl Policy {
    /// Creates a policy with the given minimum length and no character-class
    /// criteria enabled.
    pub fn new(min_length: NonZeroUsize) -> Self {
        Self {
            min_length,
            capital_letter: false,
            numeric: false,
            special_character: false,
            algorithm: Algorithm::default(),
        }
    }

    pub fn capital_letter(mut self, enabled: bool) -> Self {
        self.capital_letter = enabled;
        self
    }

    pub fn numeric(mut self, enabled: bool) -> Self {
        self.numeric = enabled;
        self
    }

    pub fn special_character(mut self, enabled: bool) -> Self {
        self.special_character = enabled;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Number of enabled criteria, the length criterion included.
    pub fn enabled_count(&self) -> usize {
        1 + [self.capital_letter, self.numeric, self.special_character]
            .iter()
            .filter(|&&b| b)
            .count()
    }

    /// Builds a policy from the defaults, overridden by environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_MIN_LENGTH`: positive integer
    /// - `PWD_REQUIRE_CAPITAL`, `PWD_REQUIRE_NUMERIC`, `PWD_REQUIRE_SPECIAL`:
    ///   `true`/`false`, `1`/`0`, `yes`/`no`
    /// - `PWD_ALGORITHM`: `weighted-criteria` or `length-multiplier`
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Ok(raw) = std::env::var(ENV_MIN_LENGTH) {
            policy.min_length = raw
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| PolicyError::InvalidMinLength(raw.clone()))?;
        }
        if let Some(flag) = read_flag(ENV_REQUIRE_CAPITAL)? {
            policy.capital_letter = flag;
        }
        if let Some(flag) = read_flag(ENV_REQUIRE_NUMERIC)? {
            policy.numeric = flag;
        }
        if let Some(flag) = read_flag(ENV_REQUIRE_SPECIAL)? {
            policy.special_character = flag;
        }
        if let Ok(raw) = std::env::var(ENV_ALGORITHM) {
            policy.algorithm = raw.parse()?;
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Password policy loaded: {}", policy);

        Ok(policy)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min_length={} capital={} numeric={} special={} algorithm={}",
            self.min_length,
            self.capital_letter,
            self.numeric,
            self.special_character,
            self.algorithm
        )
    }
}

fn read_flag(var: &'static str) -> Result<Option<bool>, PolicyError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        _ => Err(PolicyError::InvalidFlag { var, value: raw }),
    }
}

impl FromStr for Algorithm {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weighted-criteria" => Ok(Algorithm::WeightedCriteria),
            "length-multiplier" => Ok(Algorithm::LengthMultiplier),
            _ => Err(PolicyError::UnknownAlgorithm(s.to_string())),
        }
    }
}
