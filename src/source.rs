//! Entity sources for the streaming tracker
//!
//! A source hands out entities one at a time and always knows how many are
//! left. Callers check [`EntitySource::remaining`] before every pull; pulling
//! from an empty source is a contract violation reported as
//! [`Error::SourceExhausted`].

use crate::{Error, Result};

/// Read-once producer of entities with a known remaining count.
pub trait EntitySource {
    /// Entity type produced by this source
    type Item;

    /// Number of entities not yet produced.
    fn remaining(&self) -> usize;

    /// Produce the next entity.
    ///
    /// # Errors
    /// Returns [`Error::SourceExhausted`] if `remaining()` was 0 at call time.
    fn next_entity(&mut self) -> Result<Self::Item>;
}

/// Source backed by an owned vector, yielded front to back.
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    entities: std::vec::IntoIter<T>,
}

impl<T> VecSource<T> {
    /// Create a source that yields `entities` in order
    #[must_use]
    pub fn new(entities: Vec<T>) -> Self {
        Self {
            entities: entities.into_iter(),
        }
    }
}

impl<T> From<Vec<T>> for VecSource<T> {
    fn from(entities: Vec<T>) -> Self {
        Self::new(entities)
    }
}

impl<T> EntitySource for VecSource<T> {
    type Item = T;

    fn remaining(&self) -> usize {
        self.entities.len()
    }

    fn next_entity(&mut self) -> Result<T> {
        self.entities.next().ok_or(Error::SourceExhausted)
    }
}

/// Adapter turning any [`ExactSizeIterator`] into an [`EntitySource`].
///
/// Useful for generated streams that should never be materialized.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I: ExactSizeIterator> IterSource<I> {
    /// Wrap an exact-size iterator
    #[must_use]
    pub const fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: ExactSizeIterator> EntitySource for IterSource<I> {
    type Item = I::Item;

    fn remaining(&self) -> usize {
        self.iter.len()
    }

    fn next_entity(&mut self) -> Result<I::Item> {
        self.iter.next().ok_or(Error::SourceExhausted)
    }
}
