//! # Strategies
//!
//! Decisions that the simplex method leaves open.
pub mod pivot_rule;
