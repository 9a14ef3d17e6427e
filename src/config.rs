//! Streaming tracker configuration
//!
//! Poka-Yoke: a [`StreamConfig`] can only be obtained through validation, so
//! the tracker never sees a zero reporting interval.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default reporting interval (entities between cutoff snapshots)
pub const DEFAULT_REPORTING_INTERVAL: usize = 50;

/// Validated configuration for [`crate::online::rank_with_config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStreamConfig")]
pub struct StreamConfig {
    reporting_interval: usize,
}

/// Config as written by the user, before validation
#[derive(Debug, Deserialize)]
struct RawStreamConfig {
    reporting_interval: i64,
}

impl TryFrom<RawStreamConfig> for StreamConfig {
    type Error = Error;

    fn try_from(raw: RawStreamConfig) -> Result<Self> {
        if raw.reporting_interval <= 0 {
            return Err(Error::InvalidInterval(raw.reporting_interval));
        }
        let reporting_interval = usize::try_from(raw.reporting_interval).map_err(|_| {
            Error::InvalidInput(format!(
                "Reporting interval {} does not fit in usize",
                raw.reporting_interval
            ))
        })?;
        Self { reporting_interval }.validate()
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            reporting_interval: DEFAULT_REPORTING_INTERVAL,
        }
    }
}

impl StreamConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> StreamConfigBuilder {
        StreamConfigBuilder::default()
    }

    /// Leaderboard size and snapshot cadence
    #[must_use]
    pub const fn reporting_interval(&self) -> usize {
        self.reporting_interval
    }

    /// Parse and validate a JSON config such as `{"reporting_interval": 50}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for malformed JSON and
    /// [`Error::InvalidInterval`] for a zero or negative interval.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawStreamConfig = serde_json::from_str(json)
            .map_err(|e| Error::InvalidInput(format!("Failed to parse stream config: {e}")))?;
        Self::try_from(raw)
    }

    const fn validate(self) -> Result<Self> {
        if self.reporting_interval == 0 {
            return Err(Error::InvalidInterval(0));
        }
        Ok(self)
    }
}

/// Stream config builder
#[derive(Debug, Default)]
pub struct StreamConfigBuilder {
    reporting_interval: Option<usize>,
}

impl StreamConfigBuilder {
    /// Set the reporting interval (also the leaderboard size)
    #[must_use]
    pub const fn reporting_interval(mut self, interval: usize) -> Self {
        self.reporting_interval = Some(interval);
        self
    }

    /// Build the config
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if the interval is zero
    pub fn build(self) -> Result<StreamConfig> {
        StreamConfig {
            reporting_interval: self
                .reporting_interval
                .unwrap_or(DEFAULT_REPORTING_INTERVAL),
        }
        .validate()
    }
}
