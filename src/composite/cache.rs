//! Memoization of composite results
//!
//! The cache maps a fully resolved request (both words, target kind and
//! shift policy) to its result. Signedness and policy are part of the key,
//! so equal word pairs composed for different containers never collide.
//!
//! It is safe to share between threads. Two threads racing on the same key
//! compute the same result; the first insert wins and both callers get a
//! complete value.
//!
//! Entries are never evicted. With a capacity set, the cache stops
//! accepting new entries once full and composition carries on uncached.

use crate::bounds::IntKind;
use crate::composite::{Composite, ShiftPolicy};

use num_bigint::BigInt;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    pub(crate) high: BigInt,
    pub(crate) low: BigInt,
    pub(crate) kind: IntKind,
    pub(crate) policy: ShiftPolicy,
}

#[derive(Debug, Default)]
pub struct CompositeCache {
    entries: RwLock<HashMap<CacheKey, Composite>>,
    capacity: Option<usize>,
}

impl CompositeCache {
    /// A cache without a size limit.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A cache holding at most `capacity` entries.
    ///
    /// Only the limit is recorded; the map grows as entries arrive, so any
    /// `capacity` up to `usize::MAX` is valid.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::default(),
            capacity: Some(capacity),
        }
    }

    /// The entry limit, `None` for an unbounded cache.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of memoized results.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every entry. The capacity limit is kept.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub(crate) fn get(&self, key: &CacheKey) -> Option<Composite> {
        self.entries.read().get(key).cloned()
    }

    /// Stores `value` unless the key is already present or the cache is
    /// full, and returns the value that callers should observe.
    pub(crate) fn insert(&self, key: CacheKey, value: Composite) -> Composite {
        let mut entries = self.entries.write();

        if let Some(existing) = entries.get(&key) {
            return existing.clone();
        }

        if self.capacity.is_some_and(|cap| entries.len() >= cap) {
            return value;
        }

        entries.insert(key, value.clone());

        value
    }
}
