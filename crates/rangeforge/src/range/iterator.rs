//! Generic iteration strategies over countable value ranges.
//!
//! Both strategies are written against the [`ValueRange`] contract alone,
//! so every countable range gets original-order and random traversal
//! without its own iterator code. Ranges with a natively cheaper walk
//! (slice-backed lists, continuous intervals) provide their own.

use std::marker::PhantomData;

use rand::{Rng, RngCore};

use crate::error::{Result, ValueRangeError};
use crate::range::traits::ValueRange;

/// Walks a countable range in index order, `0..size`.
///
/// The produced sequence is single-pass; restart by creating a new iterator
/// from the range.
pub struct OriginalValueRangeIterator<'a, T, R: ?Sized> {
    range: &'a R,
    size: u64,
    index: u64,
    _value: PhantomData<T>,
}

impl<'a, T, R: ValueRange<T> + ?Sized> OriginalValueRangeIterator<'a, T, R> {
    /// Creates an original-order iterator over `range`.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the range is not countable.
    pub fn new(range: &'a R) -> Result<Self> {
        let size = range.size()?;
        Ok(Self {
            range,
            size,
            index: 0,
            _value: PhantomData,
        })
    }
}

impl<T, R: ValueRange<T> + ?Sized> Iterator for OriginalValueRangeIterator<'_, T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index >= self.size {
            return None;
        }
        let value = self.range.get(self.index).ok()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.size - self.index).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Samples a countable range uniformly with replacement, forever.
///
/// Each draw costs one `random_range` call on the supplied source plus one
/// indexed lookup. An empty range terminates immediately instead of
/// looping.
pub struct RandomValueRangeIterator<'a, T, R: ?Sized> {
    range: &'a R,
    rng: &'a mut dyn RngCore,
    size: u64,
    _value: PhantomData<T>,
}

impl<'a, T, R: ValueRange<T> + ?Sized> RandomValueRangeIterator<'a, T, R> {
    /// Creates a uniform random iterator over `range`, drawing from `rng`.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the range is not countable.
    pub fn new(range: &'a R, rng: &'a mut dyn RngCore) -> Result<Self> {
        let size = range.size()?;
        Ok(Self {
            range,
            rng,
            size,
            _value: PhantomData,
        })
    }
}

impl<T, R: ValueRange<T> + ?Sized> Iterator for RandomValueRangeIterator<'_, T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        let index = self.rng.random_range(0..self.size);
        self.range.get(index).ok()
    }
}

/// Boxes the uniform random strategy for a range known to be countable.
///
/// Every countable range implementation routes `create_random_iterator`
/// through here; the error arm is unreachable for them.
pub(crate) fn uniform_random_iterator<'a, T, R>(
    range: &'a R,
    rng: &'a mut dyn RngCore,
) -> Box<dyn Iterator<Item = T> + 'a>
where
    T: 'a,
    R: ValueRange<T> + ?Sized,
{
    match RandomValueRangeIterator::new(range, rng) {
        Ok(iter) => Box::new(iter),
        Err(_) => Box::new(std::iter::empty()),
    }
}

/// Shared out-of-bounds error constructor.
pub(crate) fn index_out_of_bounds(index: u64, size: u64) -> ValueRangeError {
    ValueRangeError::InvalidState(format!(
        "index {index} out of bounds for value range of size {size}"
    ))
}

/// Shared uncountable-misuse error constructor.
pub(crate) fn uncountable(operation: &str) -> ValueRangeError {
    ValueRangeError::InvalidState(format!(
        "{operation} is not defined on an uncountable value range"
    ))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::range::list::ListValueRange;

    #[test]
    fn original_walks_index_order() {
        let range = ListValueRange::new(vec![10, 20, 30]);
        let iter = OriginalValueRangeIterator::new(&range).unwrap();
        assert_eq!(iter.collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn original_reports_size_hint() {
        let range = ListValueRange::new(vec![1, 2, 3, 4]);
        let mut iter = OriginalValueRangeIterator::new(&range).unwrap();
        assert_eq!(iter.size_hint(), (4, Some(4)));
        iter.next();
        assert_eq!(iter.size_hint(), (3, Some(3)));
    }

    #[test]
    fn random_draws_forever_with_replacement() {
        let range = ListValueRange::new(vec![7]);
        let mut rng = StdRng::seed_from_u64(0);
        let iter = RandomValueRangeIterator::new(&range, &mut rng).unwrap();
        let drawn: Vec<i32> = iter.take(100).collect();
        assert_eq!(drawn.len(), 100);
        assert!(drawn.iter().all(|&v| v == 7));
    }

    #[test]
    fn random_over_empty_range_terminates() {
        let range = ListValueRange::<i32>::new(vec![]);
        let mut rng = StdRng::seed_from_u64(0);
        let mut iter = RandomValueRangeIterator::new(&range, &mut rng).unwrap();
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn random_is_reproducible_for_equal_seeds() {
        let range = ListValueRange::new(vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let mut rng1 = StdRng::seed_from_u64(123);
        let first: Vec<i32> = RandomValueRangeIterator::new(&range, &mut rng1)
            .unwrap()
            .take(50)
            .collect();

        let mut rng2 = StdRng::seed_from_u64(123);
        let second: Vec<i32> = RandomValueRangeIterator::new(&range, &mut rng2)
            .unwrap()
            .take(50)
            .collect();

        assert_eq!(first, second);
    }
}
