//! # Representing linear programs
//!
//! Linear programs in canonical form contain equality constraints and nonnegative variables only.
//! This module holds that representation, the building blocks it uses and what a solved program
//! looks like.
pub mod canonical_form;
pub mod elements;
pub mod error;
pub mod solution;
