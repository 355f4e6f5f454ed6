//! Integer interval range.

use std::fmt;

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, NumCast, PrimInt, ToPrimitive};
use rand::RngCore;

use crate::error::{Result, ValueRangeError};
use crate::range::iterator::{index_out_of_bounds, uniform_random_iterator, OriginalValueRangeIterator};
use crate::range::traits::ValueRange;

/// A countable range of integers defined by bounds and a step, never by an
/// in-memory collection.
///
/// The range covers `[lower, upper)` — inclusive lower bound, exclusive
/// upper bound — visiting `lower`, `lower + step`, `lower + 2 * step`, ...
/// Size and indexed lookup are computed arithmetically, so a domain of a
/// billion integers costs the same memory as one of three. Size arithmetic
/// that exceeds the element type (or `u64` indices) fails with
/// [`ValueRangeError::Overflow`] at construction rather than wrapping.
///
/// # Example
///
/// ```
/// use rangeforge::{IntValueRange, ValueRange};
///
/// let range = IntValueRange::with_step(0, 10, 2)?;
/// assert_eq!(range.size()?, 5);
/// assert_eq!(range.get(3)?, 6);
/// let values: Vec<i64> = range.create_original_iterator()?.collect();
/// assert_eq!(values, vec![0, 2, 4, 6, 8]);
/// # Ok::<(), rangeforge::ValueRangeError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntValueRange<V> {
    lower: V,
    upper: V,
    step: V,
    size: u64,
}

impl<V> IntValueRange<V>
where
    V: PrimInt + CheckedAdd + CheckedSub + CheckedMul + fmt::Debug,
{
    /// Creates the range `[lower, upper)` with a step of 1.
    ///
    /// # Errors
    ///
    /// `Overflow` if the span is not representable.
    pub fn new(lower: V, upper: V) -> Result<Self> {
        Self::with_step(lower, upper, V::one())
    }

    /// Creates the range `[lower, upper)` visiting every `step`-th value.
    ///
    /// An inverted interval (`upper <= lower`) is a legal, empty range.
    ///
    /// # Errors
    ///
    /// `Construction` if `step` is not positive, `Overflow` if the span is
    /// not representable.
    pub fn with_step(lower: V, upper: V, step: V) -> Result<Self> {
        if step <= V::zero() {
            return Err(ValueRangeError::Construction(format!(
                "increment step {step:?} must be positive"
            )));
        }
        let size = Self::compute_size(lower, upper, step).map_err(|e| {
            tracing::debug!(error = %e, "integer range span is not representable");
            e
        })?;
        Ok(Self {
            lower,
            upper,
            step,
            size,
        })
    }

    /// Creates the range `[0, n)`.
    ///
    /// # Errors
    ///
    /// `Overflow` if the span is not representable.
    pub fn from_zero(n: V) -> Result<Self> {
        Self::new(V::zero(), n)
    }

    // ceil((upper - lower) / step), clamped to 0, checked throughout.
    fn compute_size(lower: V, upper: V, step: V) -> Result<u64> {
        if upper <= lower {
            return Ok(0);
        }
        let span = upper.checked_sub(&lower).ok_or_else(|| {
            ValueRangeError::Overflow(format!(
                "span of integer range [{lower:?}, {upper:?}) exceeds the element type"
            ))
        })?;
        let full = span / step;
        let mut size = full.to_u64().ok_or_else(|| {
            ValueRangeError::Overflow(format!(
                "integer range [{lower:?}, {upper:?}) step {step:?} has more values than u64 can index"
            ))
        })?;
        if span % step > V::zero() {
            size = size.checked_add(1).ok_or_else(|| {
                ValueRangeError::Overflow(format!(
                    "integer range [{lower:?}, {upper:?}) step {step:?} has more values than u64 can index"
                ))
            })?;
        }
        Ok(size)
    }

    /// The inclusive lower bound.
    pub fn lower_bound(&self) -> V {
        self.lower
    }

    /// The exclusive upper bound.
    pub fn upper_bound(&self) -> V {
        self.upper
    }

    /// The distance between consecutive values.
    pub fn increment_step(&self) -> V {
        self.step
    }
}

impl<V> ValueRange<V> for IntValueRange<V>
where
    V: PrimInt + CheckedAdd + CheckedSub + CheckedMul + fmt::Debug + Send + Sync,
{
    fn is_countable(&self) -> bool {
        true
    }

    fn size(&self) -> Result<u64> {
        Ok(self.size)
    }

    fn get(&self, index: u64) -> Result<V> {
        if index >= self.size {
            return Err(index_out_of_bounds(index, self.size));
        }
        let offset: V = NumCast::from(index).ok_or_else(|| {
            ValueRangeError::Overflow(format!("index {index} does not fit the element type"))
        })?;
        self.step
            .checked_mul(&offset)
            .and_then(|delta| self.lower.checked_add(&delta))
            .ok_or_else(|| {
                ValueRangeError::Overflow(format!(
                    "value at index {index} of integer range [{:?}, {:?}) step {:?} overflows",
                    self.lower, self.upper, self.step
                ))
            })
    }

    fn create_original_iterator(&self) -> Result<Box<dyn Iterator<Item = V> + '_>> {
        Ok(Box::new(OriginalValueRangeIterator::new(self)?))
    }

    fn create_random_iterator<'a>(
        &'a self,
        rng: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = V> + 'a> {
        uniform_random_iterator(self, rng)
    }
}
