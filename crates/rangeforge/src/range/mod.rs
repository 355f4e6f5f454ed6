//! Value range representations and their traversals.
//!
//! The [`ValueRange`] trait is the contract every representation
//! implements:
//! - [`ListValueRange`]: an explicit ordered collection
//! - [`IntValueRange`]: integer bounds plus step, O(1) space
//! - [`DoubleValueRange`]: a continuous interval, sampling only
//! - [`DecimalValueRange`]: decimal bounds plus step (feature `decimal`)
//! - [`CompositeValueRange`]: a union of same-typed members
//! - [`NullableValueRange`]: any countable range plus an absent element

mod composite;
#[cfg(feature = "decimal")]
mod decimal;
mod double;
mod int;
mod iterator;
mod list;
mod nullable;
mod traits;

pub use composite::CompositeValueRange;
#[cfg(feature = "decimal")]
pub use decimal::DecimalValueRange;
pub use double::DoubleValueRange;
pub use int::IntValueRange;
pub use iterator::{OriginalValueRangeIterator, RandomValueRangeIterator};
pub use list::ListValueRange;
pub use nullable::NullableValueRange;
pub use traits::ValueRange;
