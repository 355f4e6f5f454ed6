//! Value range providers for planning variables.
//!
//! Value range providers define the possible values that can be assigned to
//! planning variables. They can be static (fixed values) or dynamic
//! (computed from the solution state). A provider constructs a fresh
//! [`ValueRange`] per access: domains that depend on other variables are
//! rebuilt whenever the solution may have changed, never mutated in place.

use std::marker::PhantomData;

use crate::range::{ListValueRange, ValueRange};

/// Provides the value range for a planning variable.
///
/// # Type Parameters
///
/// * `S` - The solution type
/// * `V` - The value type (must match the planning variable's type)
///
/// # Example
///
/// ```
/// use rangeforge::{IntValueRange, ValueRange, ValueRangeProvider};
///
/// // Define a solution with a size field
/// struct NQueensSolution {
///     n: i64,
/// }
///
/// // Implement a value range provider that computes the row domain
/// struct RowRangeProvider;
///
/// impl ValueRangeProvider<NQueensSolution, i64> for RowRangeProvider {
///     fn value_range(&self, solution: &NQueensSolution) -> Box<dyn ValueRange<i64>> {
///         Box::new(IntValueRange::new(0, solution.n).expect("row bounds fit i64"))
///     }
/// }
///
/// let solution = NQueensSolution { n: 8 };
/// let provider = RowRangeProvider;
/// assert_eq!(provider.value_count(&solution), Some(8));
/// assert!(!provider.is_empty(&solution));
/// ```
pub trait ValueRangeProvider<S, V>: Send + Sync {
    /// Builds a fresh value range for the variable, given the current
    /// solution state.
    ///
    /// This method is called during move generation; the returned range is
    /// owned by that search operation and discarded when its candidate
    /// generation is done.
    fn value_range(&self, solution: &S) -> Box<dyn ValueRange<V>>;

    /// Returns the number of possible values, or `None` for an uncountable
    /// range.
    ///
    /// The default implementation builds the range and asks it;
    /// implementations may override this when the count is computable
    /// without constructing the range.
    fn value_count(&self, solution: &S) -> Option<u64> {
        self.value_range(solution).size().ok()
    }

    /// Returns whether the value range is known to be empty.
    fn is_empty(&self, solution: &S) -> bool {
        self.value_count(solution) == Some(0)
    }
}

/// A value range provider with a fixed set of values.
///
/// Use this when the possible values don't depend on solution state.
pub struct StaticValueRangeProvider<V> {
    values: Vec<V>,
}

impl<V> StaticValueRangeProvider<V> {
    /// Creates a provider over a fixed value collection.
    pub fn new(values: Vec<V>) -> Self {
        Self { values }
    }
}

impl<S, V> ValueRangeProvider<S, V> for StaticValueRangeProvider<V>
where
    S: Send + Sync,
    V: Clone + Send + Sync + 'static,
{
    fn value_range(&self, _solution: &S) -> Box<dyn ValueRange<V>> {
        Box::new(ListValueRange::new(self.values.clone()))
    }

    fn value_count(&self, _solution: &S) -> Option<u64> {
        Some(self.values.len() as u64)
    }
}

/// A value range provider backed by a field in the solution.
///
/// This is the most common case: a `Vec<V>` field that contains the
/// possible values. The field is copied into the range at access time, so
/// the range stays stable even if the solution mutates afterwards.
pub struct FieldValueRangeProvider<S, V, F>
where
    F: Fn(&S) -> &Vec<V> + Send + Sync,
{
    getter: F,
    _marker: PhantomData<(S, V)>,
}

impl<S, V, F> FieldValueRangeProvider<S, V, F>
where
    F: Fn(&S) -> &Vec<V> + Send + Sync,
{
    /// Creates a new field-based value range provider.
    pub fn new(getter: F) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<S, V, F> ValueRangeProvider<S, V> for FieldValueRangeProvider<S, V, F>
where
    S: Send + Sync,
    V: Clone + Send + Sync + 'static,
    F: Fn(&S) -> &Vec<V> + Send + Sync,
{
    fn value_range(&self, solution: &S) -> Box<dyn ValueRange<V>> {
        Box::new(ListValueRange::new((self.getter)(solution).clone()))
    }

    fn value_count(&self, solution: &S) -> Option<u64> {
        Some((self.getter)(solution).len() as u64)
    }
}

/// A value range provider that computes a range dynamically.
///
/// Use this for derived domains: the closure rebuilds the range from the
/// current solution state on every access, which is how domains that
/// depend on another variable's value stay correct without in-place
/// mutation.
pub struct ComputedValueRangeProvider<S, V, F>
where
    F: Fn(&S) -> Box<dyn ValueRange<V>> + Send + Sync,
{
    compute: F,
    _marker: PhantomData<(S, V)>,
}

impl<S, V, F> ComputedValueRangeProvider<S, V, F>
where
    F: Fn(&S) -> Box<dyn ValueRange<V>> + Send + Sync,
{
    /// Creates a new computed value range provider.
    pub fn new(compute: F) -> Self {
        Self {
            compute,
            _marker: PhantomData,
        }
    }
}

impl<S, V, F> ValueRangeProvider<S, V> for ComputedValueRangeProvider<S, V, F>
where
    S: Send + Sync,
    V: Send + Sync,
    F: Fn(&S) -> Box<dyn ValueRange<V>> + Send + Sync,
{
    fn value_range(&self, solution: &S) -> Box<dyn ValueRange<V>> {
        (self.compute)(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::IntValueRange;

    struct TestSolution {
        n: i64,
        values: Vec<i32>,
    }

    #[test]
    fn static_provider_ignores_the_solution() {
        let provider = StaticValueRangeProvider::new(vec![1, 2, 3, 4, 5]);
        let solution = TestSolution {
            n: 5,
            values: vec![],
        };

        let range = ValueRangeProvider::<TestSolution, i32>::value_range(&provider, &solution);
        let values: Vec<i32> = range.create_original_iterator().unwrap().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            ValueRangeProvider::<TestSolution, i32>::value_count(&provider, &solution),
            Some(5)
        );
    }

    #[test]
    fn field_provider_reads_the_solution_field() {
        let provider = FieldValueRangeProvider::new(|s: &TestSolution| &s.values);
        let solution = TestSolution {
            n: 3,
            values: vec![10, 20, 30],
        };

        let values: Vec<i32> = provider
            .value_range(&solution)
            .create_original_iterator()
            .unwrap()
            .collect();
        assert_eq!(values, vec![10, 20, 30]);
        assert_eq!(provider.value_count(&solution), Some(3));
    }

    #[test]
    fn field_provider_range_outlives_solution_mutation() {
        let provider = FieldValueRangeProvider::new(|s: &TestSolution| &s.values);
        let mut solution = TestSolution {
            n: 0,
            values: vec![1, 2],
        };

        let range = provider.value_range(&solution);
        solution.values.push(3);

        assert_eq!(range.size().unwrap(), 2);
    }

    #[test]
    fn computed_provider_rebuilds_from_solution_state() {
        let provider = ComputedValueRangeProvider::new(|s: &TestSolution| {
            Box::new(IntValueRange::new(0, s.n).expect("test bounds fit i64"))
                as Box<dyn ValueRange<i64>>
        });
        let mut solution = TestSolution {
            n: 4,
            values: vec![],
        };

        let values: Vec<i64> = provider
            .value_range(&solution)
            .create_original_iterator()
            .unwrap()
            .collect();
        assert_eq!(values, vec![0, 1, 2, 3]);

        // a fresh access reflects the changed state
        solution.n = 2;
        assert_eq!(provider.value_count(&solution), Some(2));
    }

    #[test]
    fn empty_field_is_reported_empty() {
        let provider = FieldValueRangeProvider::new(|s: &TestSolution| &s.values);
        let solution = TestSolution {
            n: 0,
            values: vec![],
        };
        assert!(provider.is_empty(&solution));
    }
}
