//! Fixed-point decimal interval range. Enabled by the `decimal` feature.

use num_traits::ToPrimitive;
use rand::RngCore;
use rust_decimal::Decimal;

use crate::error::{Result, ValueRangeError};
use crate::range::iterator::{index_out_of_bounds, uniform_random_iterator, OriginalValueRangeIterator};
use crate::range::traits::ValueRange;

/// A countable range of decimals over `[lower, upper)` with a positive
/// decimal step.
///
/// The stepped decimal interval is the countable counterpart of
/// [`DoubleValueRange`](crate::DoubleValueRange): money-like domains keep
/// exact arithmetic and still avoid materializing the value set.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use rangeforge::{DecimalValueRange, ValueRange};
///
/// let range = DecimalValueRange::with_step(
///     Decimal::new(100, 2), // 1.00
///     Decimal::new(200, 2), // 2.00
///     Decimal::new(25, 2),  // 0.25
/// )?;
/// assert_eq!(range.size()?, 4);
/// assert_eq!(range.get(2)?, Decimal::new(150, 2));
/// # Ok::<(), rangeforge::ValueRangeError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalValueRange {
    lower: Decimal,
    upper: Decimal,
    step: Decimal,
    size: u64,
}

impl DecimalValueRange {
    /// Creates the range `[lower, upper)` visiting every `step`-th value.
    ///
    /// # Errors
    ///
    /// `Construction` if `step` is not positive, `Overflow` if the value
    /// count exceeds `u64` indices.
    pub fn with_step(lower: Decimal, upper: Decimal, step: Decimal) -> Result<Self> {
        if step <= Decimal::ZERO {
            return Err(ValueRangeError::Construction(format!(
                "increment step {step} must be positive"
            )));
        }
        let size = Self::compute_size(lower, upper, step).map_err(|e| {
            tracing::debug!(error = %e, "decimal range span is not representable");
            e
        })?;
        Ok(Self {
            lower,
            upper,
            step,
            size,
        })
    }

    fn compute_size(lower: Decimal, upper: Decimal, step: Decimal) -> Result<u64> {
        if upper <= lower {
            return Ok(0);
        }
        let overflow = || {
            ValueRangeError::Overflow(format!(
                "decimal range [{lower}, {upper}) step {step} has more values than u64 can index"
            ))
        };
        let span = upper.checked_sub(lower).ok_or_else(overflow)?;
        let quotient = span.checked_div(step).ok_or_else(overflow)?;
        quotient.ceil().to_u64().ok_or_else(overflow)
    }

    /// The inclusive lower bound.
    pub fn lower_bound(&self) -> Decimal {
        self.lower
    }

    /// The exclusive upper bound.
    pub fn upper_bound(&self) -> Decimal {
        self.upper
    }

    /// The distance between consecutive values.
    pub fn increment_step(&self) -> Decimal {
        self.step
    }
}

impl ValueRange<Decimal> for DecimalValueRange {
    fn is_countable(&self) -> bool {
        true
    }

    fn size(&self) -> Result<u64> {
        Ok(self.size)
    }

    fn get(&self, index: u64) -> Result<Decimal> {
        if index >= self.size {
            return Err(index_out_of_bounds(index, self.size));
        }
        self.step
            .checked_mul(Decimal::from(index))
            .and_then(|delta| self.lower.checked_add(delta))
            .ok_or_else(|| {
                ValueRangeError::Overflow(format!(
                    "value at index {index} of decimal range [{}, {}) step {} overflows",
                    self.lower, self.upper, self.step
                ))
            })
    }

    fn create_original_iterator(&self) -> Result<Box<dyn Iterator<Item = Decimal> + '_>> {
        Ok(Box::new(OriginalValueRangeIterator::new(self)?))
    }

    fn create_random_iterator<'a>(
        &'a self,
        rng: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Decimal> + 'a> {
        uniform_random_iterator(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn dec(mantissa: i64, scale: u32) -> Decimal {
        Decimal::new(mantissa, scale)
    }

    #[test]
    fn quarter_steps_across_a_unit_interval() {
        let range = DecimalValueRange::with_step(dec(100, 2), dec(200, 2), dec(25, 2)).unwrap();

        assert_eq!(range.size().unwrap(), 4);
        let values: Vec<Decimal> = range.create_original_iterator().unwrap().collect();
        assert_eq!(
            values,
            vec![dec(100, 2), dec(125, 2), dec(150, 2), dec(175, 2)]
        );
    }

    #[test]
    fn partial_final_step_rounds_the_size_up() {
        // 0.0, 0.3, 0.6, 0.9
        let range = DecimalValueRange::with_step(dec(0, 1), dec(10, 1), dec(3, 1)).unwrap();
        assert_eq!(range.size().unwrap(), 4);
        assert_eq!(range.get(3).unwrap(), dec(9, 1));
    }

    #[test]
    fn non_positive_step_is_a_construction_error() {
        assert!(matches!(
            DecimalValueRange::with_step(dec(0, 0), dec(10, 0), Decimal::ZERO),
            Err(ValueRangeError::Construction(_))
        ));
    }

    #[test]
    fn inverted_interval_is_empty() {
        let range = DecimalValueRange::with_step(dec(10, 0), dec(0, 0), dec(1, 0)).unwrap();
        assert_eq!(range.size().unwrap(), 0);
    }

    #[test]
    fn random_sampling_is_reproducible() {
        let range = DecimalValueRange::with_step(dec(0, 0), dec(100, 0), dec(5, 1)).unwrap();

        let mut rng1 = StdRng::seed_from_u64(4);
        let first: Vec<Decimal> = range.create_random_iterator(&mut rng1).take(30).collect();
        let mut rng2 = StdRng::seed_from_u64(4);
        let second: Vec<Decimal> = range.create_random_iterator(&mut rng2).take(30).collect();

        assert_eq!(first, second);
    }
}
