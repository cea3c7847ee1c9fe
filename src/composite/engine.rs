//! Composition engine
//!
//! [`Composer`] resolves both words, combines them according to its
//! [`CompositeConfig`] and promotes the result:
//!
//! 1. the narrowest fixed container at or above the target width, up to
//!    128 bits, that holds the value
//! 2. otherwise the overflow container, whose
//!    [`Biggest::exceeds_fixed_width`] is then `true`
//!
//! An unsigned request whose combined value is negative fails with
//! `BelowMinimum`: no unsigned container can hold it, and handing it to
//! the overflow container would lose the signedness the caller asked for.

use crate::biggest::Biggest;
use crate::bounds::{IntKind, Width};
use crate::composite::cache::{CacheKey, CompositeCache};
use crate::composite::{Composite, ShiftPolicy, combine};
use crate::error::{Error, Result};
use crate::int::Integer;
use crate::source::Source;

use num_bigint::BigInt;
use num_traits::Signed;
use std::sync::Arc;

/// Settings for a [`Composer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeConfig {
    /// Target width of the two-word form.
    pub default_target: Width,

    pub shift: ShiftPolicy,

    /// Maximum number of memoized results, `None` for no limit.
    pub cache_capacity: Option<usize>,
}

impl Default for CompositeConfig {
    /// 64-bit target, shift by the full target width, unbounded cache.
    fn default() -> Self {
        Self {
            default_target: Width::W64,
            shift: ShiftPolicy::TargetWidth,
            cache_capacity: None,
        }
    }
}

/// Builds integers from word pairs, promoting them to a wider container
/// when needed.
#[derive(Debug)]
pub struct Composer {
    config: CompositeConfig,
    cache: Arc<CompositeCache>,
}

impl Composer {
    /// Creates a composer with its own cache, sized by `config`.
    pub fn new(config: CompositeConfig) -> Self {
        let cache = match config.cache_capacity {
            Some(capacity) => CompositeCache::with_capacity(capacity),
            None => CompositeCache::unbounded(),
        };

        Self::with_cache(config, Arc::new(cache))
    }

    /// Creates a composer sharing `cache` with other composers.
    /// `config.cache_capacity` is ignored in favor of the cache's own.
    pub fn with_cache(config: CompositeConfig, cache: Arc<CompositeCache>) -> Self {
        Self { config, cache }
    }

    pub fn config(&self) -> &CompositeConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<CompositeCache> {
        &self.cache
    }

    /// Two-word form: signed, default target width.
    pub fn compose(&self, high: impl Into<Source>, low: impl Into<Source>) -> Result<Composite> {
        self.compose_as(high, low, IntKind::signed(self.config.default_target))
    }

    /// Three-word form: signed, explicit target width.
    pub fn compose_to(
        &self,
        high: impl Into<Source>,
        low: impl Into<Source>,
        target: Width,
    ) -> Result<Composite> {
        self.compose_as(high, low, IntKind::signed(target))
    }

    /// Composes for an explicit target width and signedness.
    pub fn compose_as(
        &self,
        high: impl Into<Source>,
        low: impl Into<Source>,
        kind: IntKind,
    ) -> Result<Composite> {
        let key = CacheKey {
            high: high.into().into_word()?,
            low: low.into().into_word()?,
            kind,
            policy: self.config.shift,
        };

        if let Some(hit) = self.cache.get(&key) {
            tracing::trace!(high = %key.high, low = %key.low, %kind, "composite cache hit");

            return Ok(hit);
        }

        tracing::trace!(high = %key.high, low = %key.low, %kind, "composite cache miss");

        let value = combine(&key.high, &key.low, kind.width, key.policy);
        let composite = promote(value, kind)?;

        Ok(self.cache.insert(key, composite))
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(CompositeConfig::default())
    }
}

fn promote(value: BigInt, kind: IntKind) -> Result<Composite> {
    if !kind.signed && value.is_negative() {
        return Err(Error::BelowMinimum {
            ty: kind.name(),
            value: value.into(),
            min: kind.min().into(),
        });
    }

    let container = kind
        .width
        .ladder()
        .map(|width| IntKind {
            width,
            signed: kind.signed,
        })
        .find(|candidate| candidate.contains(&value));

    match container {
        Some(container) => Ok(Composite::Fixed(Integer::from_checked(
            value,
            Some(container),
        ))),
        None => {
            tracing::debug!(%value, %kind, "composite exceeds every fixed width");

            Ok(Composite::Biggest(Biggest::from(value)))
        }
    }
}
