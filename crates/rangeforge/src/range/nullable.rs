//! Nullable decorator: one extra "no value assigned" element.

use std::fmt;

use rand::RngCore;

use crate::error::{Result, ValueRangeError};
use crate::range::iterator::{index_out_of_bounds, uniform_random_iterator};
use crate::range::traits::ValueRange;

/// Decorates a countable range with a single absent element, for variables
/// that permit staying unassigned.
///
/// The decorated range produces `Option<T>`: every base value surfaces as
/// `Some`, and one synthetic slot yields `None`. The slot sits at the
/// **last** index (`base.size`), so original iteration enumerates the base
/// sequence first and the absent element last. Random iteration is uniform
/// over all `base.size + 1` slots, so `None` is drawn with probability
/// `1 / (base.size + 1)`.
///
/// # Example
///
/// ```
/// use rangeforge::{IntValueRange, NullableValueRange, ValueRange};
///
/// let range = NullableValueRange::new(Box::new(IntValueRange::new(0, 4)?))?;
/// assert_eq!(range.size()?, 5);
/// assert_eq!(range.get(2)?, Some(2));
/// assert_eq!(range.get(4)?, None);
/// # Ok::<(), rangeforge::ValueRangeError>(())
/// ```
pub struct NullableValueRange<T> {
    base: Box<dyn ValueRange<T>>,
    base_size: u64,
}

impl<T> NullableValueRange<T> {
    /// Wraps `base`, adding the absent element at index `base.size`.
    ///
    /// # Errors
    ///
    /// `Construction` if the base range is not countable — an uncountable
    /// domain has no indexed slot to extend. `Overflow` if the base already
    /// fills the entire `u64` index space.
    pub fn new(base: Box<dyn ValueRange<T>>) -> Result<Self> {
        if !base.is_countable() {
            return Err(ValueRangeError::Construction(
                "nullable decorator requires a countable base range".to_string(),
            ));
        }
        let base_size = base.size()?;
        if base_size.checked_add(1).is_none() {
            return Err(ValueRangeError::Overflow(
                "nullable decorator cannot extend a range of u64::MAX values".to_string(),
            ));
        }
        tracing::trace!(base_size, "decorated value range with an absent element");
        Ok(Self { base, base_size })
    }

    /// The size of the wrapped range, excluding the absent slot.
    pub fn base_size(&self) -> u64 {
        self.base_size
    }
}

impl<T> fmt::Debug for NullableValueRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NullableValueRange")
            .field("base_size", &self.base_size)
            .finish()
    }
}

impl<T> ValueRange<Option<T>> for NullableValueRange<T> {
    fn is_countable(&self) -> bool {
        true
    }

    fn size(&self) -> Result<u64> {
        Ok(self.base_size + 1)
    }

    fn get(&self, index: u64) -> Result<Option<T>> {
        if index < self.base_size {
            return self.base.get(index).map(Some);
        }
        if index == self.base_size {
            return Ok(None);
        }
        Err(index_out_of_bounds(index, self.base_size + 1))
    }

    fn create_original_iterator(&self) -> Result<Box<dyn Iterator<Item = Option<T>> + '_>> {
        let base = self.base.create_original_iterator()?;
        Ok(Box::new(base.map(Some).chain(std::iter::once(None))))
    }

    fn create_random_iterator<'a>(
        &'a self,
        rng: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Option<T>> + 'a> {
        uniform_random_iterator(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::range::double::DoubleValueRange;
    use crate::range::int::IntValueRange;
    use crate::range::list::ListValueRange;

    fn base_of_four() -> NullableValueRange<i64> {
        NullableValueRange::new(Box::new(IntValueRange::new(0i64, 4).unwrap())).unwrap()
    }

    #[test]
    fn adds_exactly_one_slot() {
        let range = base_of_four();
        assert_eq!(range.size().unwrap(), 5);
        assert_eq!(range.base_size(), 4);
    }

    #[test]
    fn only_the_last_index_is_absent() {
        let range = base_of_four();
        let absent: Vec<u64> = (0..range.size().unwrap())
            .filter(|&i| range.get(i).unwrap().is_none())
            .collect();
        assert_eq!(absent, vec![4]);
        assert_eq!(range.get(0).unwrap(), Some(0));
        assert_eq!(range.get(3).unwrap(), Some(3));
    }

    #[test]
    fn original_iteration_yields_the_absent_element_last() {
        let range =
            NullableValueRange::new(Box::new(ListValueRange::new(vec!['a', 'b']))).unwrap();
        let values: Vec<Option<char>> = range.create_original_iterator().unwrap().collect();
        assert_eq!(values, vec![Some('a'), Some('b'), None]);
    }

    #[test]
    fn out_of_bounds_get_fails_fast() {
        let range = base_of_four();
        assert!(range.get(5).is_err());
    }

    #[test]
    fn empty_base_leaves_only_the_absent_element() {
        let range =
            NullableValueRange::new(Box::new(ListValueRange::<i32>::new(vec![]))).unwrap();
        assert_eq!(range.size().unwrap(), 1);
        assert_eq!(range.get(0).unwrap(), None);

        let values: Vec<Option<i32>> = range.create_original_iterator().unwrap().collect();
        assert_eq!(values, vec![None]);
    }

    #[test]
    fn uncountable_base_is_rejected() {
        let result = NullableValueRange::new(Box::new(DoubleValueRange::new(0.0, 1.0).unwrap()));
        assert!(matches!(result, Err(ValueRangeError::Construction(_))));
    }

    #[test]
    fn absent_rate_approaches_one_over_size() {
        let range = base_of_four();
        let mut rng = StdRng::seed_from_u64(2024);

        let draws = 100_000;
        let absent = range
            .create_random_iterator(&mut rng)
            .take(draws)
            .filter(Option::is_none)
            .count();

        // expected rate 1/5
        let rate = absent as f64 / draws as f64;
        assert!((0.19..0.21).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn random_iteration_is_reproducible() {
        let range = base_of_four();

        let mut rng1 = StdRng::seed_from_u64(31);
        let first: Vec<Option<i64>> = range.create_random_iterator(&mut rng1).take(25).collect();
        let mut rng2 = StdRng::seed_from_u64(31);
        let second: Vec<Option<i64>> = range.create_random_iterator(&mut rng2).take(25).collect();

        assert_eq!(first, second);
    }
}
