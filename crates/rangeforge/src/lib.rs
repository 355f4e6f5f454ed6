//! rangeforge - Value range abstractions for planning variable domains
//!
//! This crate provides the domain-representation layer of a planning
//! solver:
//! - The [`ValueRange`] contract: countability, size, indexed lookup,
//!   original-order iteration, seeded random iteration
//! - Range implementations over collections, numeric intervals, unions and
//!   nullable domains
//! - [`ValueRangeProvider`] suppliers that rebuild ranges from solution
//!   state
//!
//! Reproducibility is structural: every randomized path takes the random
//! source as an explicit parameter, so a solver run is a pure function of
//! its seed and call order.

pub mod error;
pub mod provider;
pub mod range;

pub use error::{Result, ValueRangeError};
pub use provider::{
    ComputedValueRangeProvider, FieldValueRangeProvider, StaticValueRangeProvider,
    ValueRangeProvider,
};
#[cfg(feature = "decimal")]
pub use range::DecimalValueRange;
pub use range::{
    CompositeValueRange, DoubleValueRange, IntValueRange, ListValueRange, NullableValueRange,
    OriginalValueRangeIterator, RandomValueRangeIterator, ValueRange,
};
