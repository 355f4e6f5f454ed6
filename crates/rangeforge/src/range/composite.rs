//! Union of value ranges.

use std::fmt;

use rand::{Rng, RngCore};
use smallvec::SmallVec;

use crate::error::{Result, ValueRangeError};
use crate::range::iterator::{index_out_of_bounds, uncountable, uniform_random_iterator};
use crate::range::traits::ValueRange;

/// A value range assembled as the union of member ranges of the same
/// element type.
///
/// The composite owns its members exclusively and concatenates their index
/// spaces: member order is preserved, and a cumulative prefix table maps a
/// union index to the owning member in O(log m). Random iteration draws a
/// uniform index over the total size, so a member is selected with
/// probability proportional to its size and uniformity holds across the
/// whole union even when member sizes differ.
///
/// All members must agree on countability; a countable/uncountable mix is
/// rejected at construction. An all-uncountable composite supports only
/// random iteration, picking a member uniformly per draw.
///
/// # Example
///
/// ```
/// use rangeforge::{CompositeValueRange, IntValueRange, ListValueRange, ValueRange};
///
/// let range = CompositeValueRange::new(vec![
///     Box::new(ListValueRange::new(vec![1, 2, 3])),
///     Box::new(IntValueRange::new(10, 15)?),
/// ])?;
/// assert_eq!(range.size()?, 8);
/// assert_eq!(range.get(4)?, 11); // second member, offset 1
/// # Ok::<(), rangeforge::ValueRangeError>(())
/// ```
pub struct CompositeValueRange<T> {
    members: Vec<Box<dyn ValueRange<T>>>,
    // cumulative end offsets per member; empty for uncountable composites
    prefix: SmallVec<[u64; 8]>,
    total: u64,
    countable: bool,
}

impl<T> CompositeValueRange<T> {
    /// Creates the union of `members`, in member order.
    ///
    /// An empty member list is a legal, countable, empty range.
    ///
    /// # Errors
    ///
    /// `Construction` if members mix countable and uncountable ranges,
    /// `Overflow` if the summed size exceeds `u64`.
    pub fn new(members: Vec<Box<dyn ValueRange<T>>>) -> Result<Self> {
        let countable_members = members.iter().filter(|m| m.is_countable()).count();
        if countable_members != 0 && countable_members != members.len() {
            return Err(ValueRangeError::Construction(format!(
                "composite value range mixes {countable_members} countable and {} uncountable members",
                members.len() - countable_members
            )));
        }
        let countable = countable_members == members.len();

        let mut prefix = SmallVec::new();
        let mut total = 0u64;
        if countable {
            for member in &members {
                let size = member.size()?;
                total = total.checked_add(size).ok_or_else(|| {
                    ValueRangeError::Overflow(
                        "composite value range size exceeds u64".to_string(),
                    )
                })?;
                prefix.push(total);
            }
        }

        tracing::trace!(
            member_count = members.len(),
            countable,
            total_size = total,
            "assembled composite value range"
        );
        Ok(Self {
            members,
            prefix,
            total,
            countable,
        })
    }

    /// The number of member ranges.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl<T> fmt::Debug for CompositeValueRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeValueRange")
            .field("member_count", &self.members.len())
            .field("countable", &self.countable)
            .field("total_size", &self.total)
            .finish()
    }
}

impl<T> ValueRange<T> for CompositeValueRange<T> {
    fn is_countable(&self) -> bool {
        self.countable
    }

    fn size(&self) -> Result<u64> {
        if !self.countable {
            return Err(uncountable("size"));
        }
        Ok(self.total)
    }

    fn get(&self, index: u64) -> Result<T> {
        if !self.countable {
            return Err(uncountable("indexed lookup"));
        }
        if index >= self.total {
            return Err(index_out_of_bounds(index, self.total));
        }
        // first member whose end offset exceeds the index owns it
        let member_index = self.prefix.partition_point(|&end| end <= index);
        let start = if member_index == 0 {
            0
        } else {
            self.prefix[member_index - 1]
        };
        self.members[member_index].get(index - start)
    }

    fn create_original_iterator(&self) -> Result<Box<dyn Iterator<Item = T> + '_>> {
        if !self.countable {
            return Err(uncountable("original iteration"));
        }
        let mut iterators = Vec::with_capacity(self.members.len());
        for member in &self.members {
            iterators.push(member.create_original_iterator()?);
        }
        Ok(Box::new(iterators.into_iter().flatten()))
    }

    fn create_random_iterator<'a>(
        &'a self,
        rng: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = T> + 'a> {
        if self.countable {
            // a uniform draw over the union index space selects members
            // weighted by size, then `get` delegates positionally
            uniform_random_iterator(self, rng)
        } else {
            Box::new(UncountableMemberSampler {
                members: &self.members,
                rng,
            })
        }
    }
}

/// Per-draw member delegation for all-uncountable composites: no sizes
/// exist to weight by, so members are picked uniformly. A member whose
/// sampler is exhausted ends the sequence.
struct UncountableMemberSampler<'a, T> {
    members: &'a [Box<dyn ValueRange<T>>],
    rng: &'a mut dyn RngCore,
}

impl<T> Iterator for UncountableMemberSampler<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let pick = self.rng.random_range(0..self.members.len());
        self.members[pick].create_random_iterator(&mut *self.rng).next()
    }
}
