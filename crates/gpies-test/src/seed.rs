//! Seed sources for fixture generators

use std::env::{self, VarError};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// Environment variable that pins the fixture seed
pub const SEED_ENV_VAR: &str = "GPIES_TEST_SEED";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid seed in {var}: {value:?} is not an unsigned 64-bit integer")]
    InvalidSeed { var: &'static str, value: String },
}

/// Where a generator's seed comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Wall-clock seconds since the UNIX epoch.
    ///
    /// Generators seeded within the same second produce identical sequences.
    #[default]
    Clock,
    /// A fixed seed for repeatable runs
    Fixed(u64),
}

impl SeedSource {
    /// `Fixed` from `GPIES_TEST_SEED` if set, `Clock` otherwise
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(SEED_ENV_VAR) {
            Ok(value) => Self::parse(Some(&value)),
            Err(VarError::NotPresent) => Ok(SeedSource::Clock),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidSeed {
                var: SEED_ENV_VAR,
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Interpret a raw setting. Missing or blank means `Clock`.
    pub fn parse(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(SeedSource::Clock);
        };

        value
            .parse::<u64>()
            .map(SeedSource::Fixed)
            .map_err(|_| ConfigError::InvalidSeed {
                var: SEED_ENV_VAR,
                value: value.to_string(),
            })
    }

    /// Produce the concrete seed
    pub fn resolve(self) -> u64 {
        match self {
            SeedSource::Clock => clock_seed(),
            SeedSource::Fixed(seed) => seed,
        }
    }
}

fn clock_seed() -> u64 {
    // A clock before the epoch only happens on badly misconfigured hosts
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
