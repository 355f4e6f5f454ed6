//! Continuous floating-point interval range.

use rand::{Rng, RngCore};

use crate::error::{Result, ValueRangeError};
use crate::range::iterator::uncountable;
use crate::range::traits::ValueRange;

/// An uncountable range over the continuous interval `[lower, upper)`.
///
/// A continuous interval has no finite enumeration, so `size`, `get` and
/// `create_original_iterator` fail with `InvalidState`; the only way to
/// consume this range is random sampling (or bound-based heuristics in the
/// consuming search algorithm, via [`lower_bound`](Self::lower_bound) and
/// [`upper_bound`](Self::upper_bound)).
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rangeforge::{DoubleValueRange, ValueRange};
///
/// let range = DoubleValueRange::new(1.2, 1.4)?;
/// assert!(!range.is_countable());
/// assert!(range.size().is_err());
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let sample = range.create_random_iterator(&mut rng).next().unwrap();
/// assert!((1.2..1.4).contains(&sample));
/// # Ok::<(), rangeforge::ValueRangeError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoubleValueRange {
    lower: f64,
    upper: f64,
}

impl DoubleValueRange {
    /// Creates the continuous interval `[lower, upper)`.
    ///
    /// # Errors
    ///
    /// `Construction` if either bound is not finite or `upper < lower`.
    /// `upper == lower` is legal and degenerate: the interval contains
    /// nothing and its random iterator terminates immediately.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(ValueRangeError::Construction(format!(
                "double range bounds [{lower}, {upper}) must be finite"
            )));
        }
        if upper < lower {
            return Err(ValueRangeError::Construction(format!(
                "double range upper bound {upper} is below lower bound {lower}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// The inclusive lower bound.
    pub fn lower_bound(&self) -> f64 {
        self.lower
    }

    /// The exclusive upper bound.
    pub fn upper_bound(&self) -> f64 {
        self.upper
    }
}

impl ValueRange<f64> for DoubleValueRange {
    fn is_countable(&self) -> bool {
        false
    }

    fn size(&self) -> Result<u64> {
        Err(uncountable("size"))
    }

    fn get(&self, _index: u64) -> Result<f64> {
        Err(uncountable("indexed lookup"))
    }

    fn create_original_iterator(&self) -> Result<Box<dyn Iterator<Item = f64> + '_>> {
        Err(uncountable("original iteration"))
    }

    fn create_random_iterator<'a>(
        &'a self,
        rng: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = f64> + 'a> {
        if self.lower >= self.upper {
            return Box::new(std::iter::empty());
        }
        let (lower, upper) = (self.lower, self.upper);
        Box::new(std::iter::from_fn(move || {
            Some(rng.random_range(lower..upper))
        }))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn countable_operations_fail_with_invalid_state() {
        let range = DoubleValueRange::new(1.2, 1.4).unwrap();

        assert!(!range.is_countable());
        assert!(matches!(
            range.size(),
            Err(ValueRangeError::InvalidState(_))
        ));
        assert!(matches!(
            range.get(0),
            Err(ValueRangeError::InvalidState(_))
        ));
        assert!(range.create_original_iterator().is_err());
    }

    #[test]
    fn samples_stay_inside_the_interval() {
        let range = DoubleValueRange::new(-2.5, 7.5).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for sample in range.create_random_iterator(&mut rng).take(1_000) {
            assert!((-2.5..7.5).contains(&sample));
        }
    }

    #[test]
    fn sampling_is_reproducible_for_equal_seeds() {
        let range = DoubleValueRange::new(0.0, 1.0).unwrap();

        let mut rng1 = StdRng::seed_from_u64(99);
        let first: Vec<f64> = range.create_random_iterator(&mut rng1).take(20).collect();
        let mut rng2 = StdRng::seed_from_u64(99);
        let second: Vec<f64> = range.create_random_iterator(&mut rng2).take(20).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_interval_samples_nothing() {
        let range = DoubleValueRange::new(3.0, 3.0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(range.create_random_iterator(&mut rng).next(), None);
    }

    #[test]
    fn invalid_bounds_are_construction_errors() {
        assert!(matches!(
            DoubleValueRange::new(f64::NAN, 1.0),
            Err(ValueRangeError::Construction(_))
        ));
        assert!(matches!(
            DoubleValueRange::new(0.0, f64::INFINITY),
            Err(ValueRangeError::Construction(_))
        ));
        assert!(matches!(
            DoubleValueRange::new(2.0, 1.0),
            Err(ValueRangeError::Construction(_))
        ));
    }
}
