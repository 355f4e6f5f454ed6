//! The value range contract

use rand::RngCore;

use crate::error::Result;

/// A set of values a planning variable may take.
///
/// A value range might be backed by an explicit collection, but numeric
/// domains are represented by their bounds instead, so a range over a
/// billion integers costs no more memory than one over three. The solver's
/// inner loop reads a range in two ways: exhaustive enumeration in a fixed
/// index order, and uniform sampling with replacement driven by a seeded
/// random source.
///
/// A value range is stateful relative to the solution: it is constructed
/// fresh whenever the underlying domain may have changed and is never
/// mutated afterwards, so `&self` operations are safe to call from multiple
/// threads against the same instance.
///
/// # Countability
///
/// Countable ranges have a finite size and an index order `0..size` that is
/// stable for the lifetime of the instance. Uncountable ranges (for example
/// a continuous `f64` interval) only support random sampling; `size`,
/// `get` and `create_original_iterator` fail with
/// [`ValueRangeError::InvalidState`](crate::ValueRangeError::InvalidState).
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rangeforge::{ListValueRange, ValueRange};
///
/// let range = ListValueRange::new(vec![5, 7, 9]);
/// assert!(range.is_countable());
/// assert_eq!(range.size()?, 3);
/// assert_eq!(range.get(2)?, 9);
///
/// let values: Vec<i32> = range.create_original_iterator()?.collect();
/// assert_eq!(values, vec![5, 7, 9]);
///
/// // Sampling consumes entropy only from the supplied source, so a fixed
/// // seed replays the exact sequence.
/// let mut rng = StdRng::seed_from_u64(42);
/// let first: Vec<i32> = range.create_random_iterator(&mut rng).take(4).collect();
/// let mut rng = StdRng::seed_from_u64(42);
/// let second: Vec<i32> = range.create_random_iterator(&mut rng).take(4).collect();
/// assert_eq!(first, second);
/// # Ok::<(), rangeforge::ValueRangeError>(())
/// ```
pub trait ValueRange<T>: Send + Sync {
    /// Returns false if the range cannot be enumerated
    /// (for example an `f64` range between 1.2 and 1.4).
    fn is_countable(&self) -> bool;

    /// Returns the exact number of values in this range, always `>= 0`.
    ///
    /// A size of 0 is a legal, empty domain. Repeated calls on the same
    /// instance return the same value.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the range is not countable.
    fn size(&self) -> Result<u64>;

    /// Returns the value at `index`.
    ///
    /// The mapping from index to value is deterministic for the life of the
    /// instance. Only the nullable decorator produces an absent value
    /// (`None`); base ranges never do.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the range is not countable or `index >= size`.
    fn get(&self, index: u64) -> Result<T>;

    /// Creates a lazy, single-pass iterator over the values in index order.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the range is not countable; uncountable domains
    /// must be consumed through [`create_random_iterator`](Self::create_random_iterator).
    fn create_original_iterator(&self) -> Result<Box<dyn Iterator<Item = T> + '_>>;

    /// Creates a lazy, unbounded iterator that samples values uniformly
    /// with replacement.
    ///
    /// Every draw consumes entropy exclusively from `rng`; two sources
    /// seeded identically replay identical sequences, which is what makes
    /// solver runs reproducible. The source is borrowed for the life of the
    /// iterator, so it cannot be fed into a second consumer concurrently.
    ///
    /// The sequence is conceptually infinite. The one exception is an empty
    /// countable range, whose iterator terminates immediately.
    fn create_random_iterator<'a>(
        &'a self,
        rng: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = T> + 'a>;
}
