//! # Linear algebra primitives
//!
//! Dense primitives, sized for the small problems a tableau method is meant for.
pub mod matrix;
