//! Discrete collection range.

use rand::RngCore;

use crate::error::Result;
use crate::range::iterator::{index_out_of_bounds, uniform_random_iterator};
use crate::range::traits::ValueRange;

/// A value range over an explicit, ordered collection of values.
///
/// The collection is captured at construction time: the range owns its
/// `Vec`, so later mutation of the source data is never observed. Always
/// countable; `get` is a positional lookup.
///
/// # Example
///
/// ```
/// use rangeforge::{ListValueRange, ValueRange};
///
/// let range = ListValueRange::new(vec!["red", "green", "blue"]);
/// assert_eq!(range.size()?, 3);
/// assert_eq!(range.get(1)?, "green");
/// # Ok::<(), rangeforge::ValueRangeError>(())
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListValueRange<T> {
    values: Vec<T>,
}

impl<T> ListValueRange<T> {
    /// Creates a range over the given values, in the given order.
    ///
    /// Taking ownership of the `Vec` is the defensive copy: a caller that
    /// keeps a shared source collection clones it exactly once, here.
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> From<Vec<T>> for ListValueRange<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: Clone + Send + Sync> ValueRange<T> for ListValueRange<T> {
    fn is_countable(&self) -> bool {
        true
    }

    fn size(&self) -> Result<u64> {
        Ok(self.values.len() as u64)
    }

    fn get(&self, index: u64) -> Result<T> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.values.get(i))
            .cloned()
            .ok_or_else(|| index_out_of_bounds(index, self.values.len() as u64))
    }

    fn create_original_iterator(&self) -> Result<Box<dyn Iterator<Item = T> + '_>> {
        Ok(Box::new(self.values.iter().cloned()))
    }

    fn create_random_iterator<'a>(
        &'a self,
        rng: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = T> + 'a> {
        uniform_random_iterator(self, rng)
    }
}
