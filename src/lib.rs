//! # Trueno-Rank: Top-K Leaderboard Selection
//!
//! Trueno-Rank selects the highest-level entities of a population under two
//! access patterns:
//!
//! - **Offline**: the whole population is in memory. [`offline::quickselect_rank`]
//!   and [`offline::heap_rank`] reorder it in place and return the sorted
//!   top decile.
//! - **Online**: entities stream in one at a time and only a fixed-size
//!   leaderboard may be kept. [`online::rank_incoming`] maintains the best
//!   `R` seen so far and snapshots the admission threshold every `R` entities.
//!
//! All three return the same [`RankingResult`].
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Muda elimination**: select first, sort only the winners
//! - **Poka-Yoke safety**: zero reporting intervals are rejected up front
//! - **Genchi Genbutsu**: elapsed time excludes waiting on the source
//! - **Jidoka**: partition and heap selectors cross-check each other
//!
//! ## Example Usage
//!
//! ```rust
//! use trueno_rank::offline::quickselect_rank;
//! use trueno_rank::online::rank_incoming;
//! use trueno_rank::source::VecSource;
//! use trueno_rank::Player;
//!
//! # fn main() -> trueno_rank::Result<()> {
//! let players: Vec<Player> = (0..100u32)
//!     .map(|i| Player::new(format!("Player_{i:03}"), (i * 37) % 100))
//!     .collect();
//!
//! // Offline: top 10% of a materialized population
//! let mut population = players.clone();
//! let offline = quickselect_rank(&mut population);
//! assert_eq!(offline.len(), 10);
//!
//! // Online: top 25 of a stream, with a cutoff every 25 players
//! let mut stream = VecSource::new(players);
//! let online = rank_incoming(&mut stream, 25)?;
//! assert_eq!(online.len(), 25);
//! assert_eq!(online.cutoffs().len(), 4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod heap;
pub mod offline;
pub mod online;
pub mod player;
pub mod result;
pub mod source;
pub mod timer;

pub use config::StreamConfig;
pub use error::{Error, Result};
pub use player::{Player, Ranked};
pub use result::RankingResult;
pub use source::{EntitySource, IterSource, VecSource};
