//! Ranked entities
//!
//! Every selector in this crate compares entities through [`Ranked::level`]
//! and nothing else. Two entities with the same level are interchangeable
//! as far as ranking is concerned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An entity that can be placed on a leaderboard.
pub trait Ranked {
    /// Totally ordered ranking key
    type Level: Ord + Copy + fmt::Debug;

    /// The ranking key of this entity
    fn level(&self) -> Self::Level;
}

macro_rules! impl_ranked_for_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ranked for $t {
                type Level = $t;

                #[inline]
                fn level(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_ranked_for_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// A named player with a level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    level: u32,
}

impl Player {
    /// Create a new player
    #[must_use]
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Get the player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Ranked for Player {
    type Level = u32;

    #[inline]
    fn level(&self) -> u32 {
        self.level
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.level)
    }
}
