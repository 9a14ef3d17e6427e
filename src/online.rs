//! Streaming top-K leaderboard
//!
//! Entities arrive one at a time from an [`EntitySource`] and are read
//! exactly once. Only the `R` best seen so far are kept, in a [`MinHeap`]
//! whose root is the admission threshold: a newcomer gets in only by
//! beating the root, and then replaces it.
//!
//! Every `R` entities the current threshold is recorded as a cutoff, plus a
//! final cutoff at the true total when it is not a multiple of `R`.
//!
//! Time: O(N log R). Memory: O(R).

use crate::config::StreamConfig;
use crate::heap::MinHeap;
use crate::player::Ranked;
use crate::result::RankingResult;
use crate::source::EntitySource;
use crate::timer::Stopwatch;
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Drain `stream`, keeping the `reporting_interval` highest-level entities.
///
/// Returns a result whose `top` holds at most `reporting_interval` entities
/// sorted ascending, and whose `cutoffs` maps each multiple of the interval
/// (and the final total) to the lowest leaderboard level at that point.
/// `elapsed` excludes time spent inside [`EntitySource::next_entity`].
///
/// Ties at the threshold are not admitted, so among equal levels the
/// earliest arrival keeps its place.
///
/// # Errors
///
/// - [`Error::InvalidInterval`] if `reporting_interval` is zero (the stream
///   is left untouched)
/// - [`Error::SourceExhausted`] if the source fails to produce an entity it
///   reported as remaining
///
/// # Examples
///
/// ```rust
/// use trueno_rank::online::rank_incoming;
/// use trueno_rank::source::VecSource;
///
/// # fn main() -> trueno_rank::Result<()> {
/// let mut stream = VecSource::new(vec![5u32, 9, 2, 8, 1, 7, 3, 10, 4, 6]);
/// let result = rank_incoming(&mut stream, 3)?;
///
/// assert_eq!(result.top(), &[8, 9, 10]);
/// assert_eq!(result.cutoffs().get(&9), Some(&8));
/// assert_eq!(result.cutoffs().get(&10), Some(&8));
/// # Ok(())
/// # }
/// ```
pub fn rank_incoming<S>(stream: &mut S, reporting_interval: usize) -> Result<RankingResult<S::Item>>
where
    S: EntitySource,
    S::Item: Ranked,
{
    if reporting_interval == 0 {
        return Err(Error::InvalidInterval(0));
    }

    let mut watch = Stopwatch::start();
    let mut cutoffs = BTreeMap::new();
    let mut count = 0usize;

    // Prime the leaderboard with the first R entities
    let mut primed = Vec::with_capacity(reporting_interval.min(stream.remaining()));
    while count < reporting_interval && stream.remaining() > 0 {
        primed.push(watch.paused(|| stream.next_entity())?);
        count += 1;
    }
    let mut leaderboard = MinHeap::from_vec(primed);

    if count == reporting_interval {
        record_cutoff(&mut cutoffs, count, &leaderboard);
    }

    while stream.remaining() > 0 {
        let next = watch.paused(|| stream.next_entity())?;
        count += 1;

        if leaderboard
            .min_level()
            .is_some_and(|threshold| next.level() > threshold)
        {
            leaderboard.replace_min(next);
        }

        if count % reporting_interval == 0 {
            record_cutoff(&mut cutoffs, count, &leaderboard);
        }
    }

    if count % reporting_interval != 0 {
        record_cutoff(&mut cutoffs, count, &leaderboard);
    }

    let top = leaderboard.into_sorted_vec();
    let elapsed = watch.stop();
    debug!(
        read = count,
        kept = top.len(),
        cutoffs = cutoffs.len(),
        ?elapsed,
        "rank_incoming complete"
    );
    Ok(RankingResult::new(top, cutoffs, elapsed))
}

/// [`rank_incoming`] with a validated [`StreamConfig`].
///
/// # Errors
///
/// Returns [`Error::SourceExhausted`] if the source misreports its length.
pub fn rank_with_config<S>(stream: &mut S, config: &StreamConfig) -> Result<RankingResult<S::Item>>
where
    S: EntitySource,
    S::Item: Ranked,
{
    rank_incoming(stream, config.reporting_interval())
}

fn record_cutoff<T: Ranked>(
    cutoffs: &mut BTreeMap<usize, T::Level>,
    count: usize,
    leaderboard: &MinHeap<T>,
) {
    if let Some(threshold) = leaderboard.min_level() {
        trace!(count, ?threshold, "cutoff");
        cutoffs.insert(count, threshold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::source::{IterSource, VecSource};
    use std::thread;
    use std::time::Duration;

    /// Source that claims more entities than it can deliver
    struct LyingSource {
        claimed: usize,
        delivered: Vec<u32>,
    }

    impl EntitySource for LyingSource {
        type Item = u32;

        fn remaining(&self) -> usize {
            self.claimed
        }

        fn next_entity(&mut self) -> Result<u32> {
            self.claimed = self.claimed.saturating_sub(1);
            self.delivered.pop().ok_or(Error::SourceExhausted)
        }
    }

    /// Source that sleeps before handing out each entity
    struct SlowSource {
        inner: VecSource<u32>,
        delay: Duration,
    }

    impl EntitySource for SlowSource {
        type Item = u32;

        fn remaining(&self) -> usize {
            self.inner.remaining()
        }

        fn next_entity(&mut self) -> Result<u32> {
            thread::sleep(self.delay);
            self.inner.next_entity()
        }
    }

    #[test]
    fn test_elapsed_excludes_source_waits() {
        let mut stream = SlowSource {
            inner: VecSource::new((0..10u32).collect()),
            delay: Duration::from_millis(20),
        };
        let result = rank_incoming(&mut stream, 3).unwrap();

        assert_eq!(result.top(), &[7, 8, 9]);
        // The source slept 200ms in total, none of it is compute time
        assert!(
            result.elapsed() < Duration::from_millis(200),
            "elapsed {:?} includes source waits",
            result.elapsed()
        );
    }

    #[test]
    fn test_rank_incoming_walkthrough() {
        let mut stream = VecSource::new(vec![5u32, 9, 2, 8, 1, 7, 3, 10, 4, 6]);
        let result = rank_incoming(&mut stream, 3).unwrap();

        assert_eq!(result.top(), &[8, 9, 10]);
        let expected = BTreeMap::from([(3, 2), (6, 7), (9, 8), (10, 8)]);
        assert_eq!(result.cutoffs(), &expected);
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn test_rank_incoming_exact_multiple_has_no_extra_cutoff() {
        let mut stream = VecSource::new((1..=12u32).collect());
        let result = rank_incoming(&mut stream, 4).unwrap();

        assert_eq!(result.top(), &[9, 10, 11, 12]);
        let keys: Vec<usize> = result.cutoffs().keys().copied().collect();
        assert_eq!(keys, vec![4, 8, 12]);
        assert_eq!(result.cutoffs()[&4], 1);
        assert_eq!(result.cutoffs()[&8], 5);
        assert_eq!(result.cutoffs()[&12], 9);
    }

    #[test]
    fn test_rank_incoming_shorter_than_interval() {
        let mut stream = VecSource::new(vec![40u32, 10, 30, 20]);
        let result = rank_incoming(&mut stream, 10).unwrap();

        assert_eq!(result.top(), &[10, 20, 30, 40]);
        assert_eq!(result.cutoffs(), &BTreeMap::from([(4, 10)]));
    }

    #[test]
    fn test_rank_incoming_empty_stream() {
        let mut stream: VecSource<u32> = VecSource::new(Vec::new());
        let result = rank_incoming(&mut stream, 5).unwrap();
        assert!(result.is_empty());
        assert!(result.cutoffs().is_empty());
    }

    #[test]
    fn test_rank_incoming_zero_interval_rejected() {
        let mut stream = VecSource::new(vec![1u32, 2, 3]);
        let result = rank_incoming(&mut stream, 0);
        assert!(matches!(result, Err(Error::InvalidInterval(0))));
        // Nothing was read
        assert_eq!(stream.remaining(), 3);
    }

    #[test]
    fn test_rank_incoming_interval_of_one() {
        let mut stream = VecSource::new(vec![3u32, 1, 4, 1, 5]);
        let result = rank_incoming(&mut stream, 1).unwrap();
        assert_eq!(result.top(), &[5]);
        let expected = BTreeMap::from([(1, 3), (2, 3), (3, 4), (4, 4), (5, 5)]);
        assert_eq!(result.cutoffs(), &expected);
    }

    #[test]
    fn test_ties_keep_earliest_arrival() {
        let mut stream = VecSource::new(vec![
            Player::new("FIRST", 10),
            Player::new("SECOND", 20),
            Player::new("LATE", 10),
        ]);
        let result = rank_incoming(&mut stream, 2).unwrap();
        let names: Vec<&str> = result.top().iter().map(Player::name).collect();
        assert_eq!(names, vec!["FIRST", "SECOND"]);
    }

    #[test]
    fn test_source_failure_is_propagated() {
        let mut stream = LyingSource {
            claimed: 5,
            delivered: vec![1, 2],
        };
        let result = rank_incoming(&mut stream, 2);
        assert!(matches!(result, Err(Error::SourceExhausted)));
    }

    #[test]
    fn test_rank_with_config() {
        let config = StreamConfig::builder().reporting_interval(2).build().unwrap();
        let mut stream = IterSource::new((0..7u32).map(|i| (i * 5) % 7));
        let result = rank_with_config(&mut stream, &config).unwrap();
        // Stream levels: 0 5 3 1 6 4 2
        assert_eq!(result.top(), &[5, 6]);
        let expected = BTreeMap::from([(2, 0), (4, 3), (6, 5), (7, 5)]);
        assert_eq!(result.cutoffs(), &expected);
    }
}
