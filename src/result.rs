//! Ranking results
//!
//! One [`RankingResult`] is produced per algorithm invocation and is never
//! mutated afterwards.

use crate::player::Ranked;
use crate::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Output shared by every selector.
///
/// - `top`: selected entities, ascending by level
/// - `cutoffs`: milestone (entities read) → minimum leaderboard level.
///   Only the streaming tracker fills this in.
/// - `elapsed`: time spent computing, excluding source waits
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T: Serialize, T::Level: Serialize"))]
pub struct RankingResult<T: Ranked> {
    top: Vec<T>,
    cutoffs: BTreeMap<usize, T::Level>,
    elapsed: Duration,
}

impl<T: Ranked> RankingResult<T> {
    /// Assemble a result, sorting `top` ascending by level.
    ///
    /// The sort is stable and linear on input that is already sorted, which
    /// is what every selector in this crate hands in.
    #[must_use]
    pub fn new(mut top: Vec<T>, cutoffs: BTreeMap<usize, T::Level>, elapsed: Duration) -> Self {
        top.sort_by_key(Ranked::level);
        Self {
            top,
            cutoffs,
            elapsed,
        }
    }

    /// Result of an offline selector (no cutoffs)
    #[must_use]
    pub fn offline(top: Vec<T>, elapsed: Duration) -> Self {
        Self::new(top, BTreeMap::new(), elapsed)
    }

    /// Selected entities, ascending by level
    #[must_use]
    pub fn top(&self) -> &[T] {
        &self.top
    }

    /// Milestone → admission threshold snapshots
    #[must_use]
    pub const fn cutoffs(&self) -> &BTreeMap<usize, T::Level> {
        &self.cutoffs
    }

    /// Compute time
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Compute time in fractional milliseconds
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Number of selected entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.top.len()
    }

    /// True if nothing was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Lowest selected level, if any
    #[must_use]
    pub fn min_level(&self) -> Option<T::Level> {
        self.top.first().map(Ranked::level)
    }

    /// Levels of the selected entities, ascending
    #[must_use]
    pub fn levels(&self) -> Vec<T::Level> {
        self.top.iter().map(Ranked::level).collect()
    }

    /// Take ownership of the selected entities
    #[must_use]
    pub fn into_top(self) -> Vec<T> {
        self.top
    }
}

impl<T> RankingResult<T>
where
    T: Ranked + Serialize,
    T::Level: Serialize,
{
    /// Render the result as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`crate::Error::Serialization`] if an entity fails to serialize.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
