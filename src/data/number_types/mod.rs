//! # Number types
//!
//! The algorithms in this crate are defined over a single space of numbers. This module names that
//! space so that signatures elsewhere stay short.
//!
//! Only floating point types are supported. A consequence is that every comparison against zero in
//! the algorithms goes through a tolerance, see `SolverOptions`.
pub mod traits;
