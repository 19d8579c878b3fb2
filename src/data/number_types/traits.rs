//! # Traits
//!
//! The hierarchy is "mathematically exact", but the implementations aren't. Floating point numbers
//! only approximate an ordered field, which is why the algorithms compare against tolerances
//! rather than against zero.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Float, NumCast};

/// The simplex algorithm is defined over the ordered fields. All methods containing algorithmic
/// logic are written against this trait.
///
/// Automatically implemented for all types satisfying the trait's bounds, in practice `f32` and
/// `f64`.
pub trait OrderedField: Float + Sum + Debug + Display + Send + Sync + 'static {
    /// Convert a constant, like a default tolerance, into this type.
    ///
    /// Falls back to the machine epsilon for constants that can't be represented.
    fn constant(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::epsilon)
    }

    /// Whether this value lies within `tolerance` of zero.
    fn is_negligible(self, tolerance: Self) -> bool {
        self.abs() <= tolerance
    }
}

impl<T> OrderedField for T
where
    T: Float + Sum + Debug + Display + Send + Sync + 'static,
{
}
