//! # A linear program solver
//!
//! Linear programs in canonical form, minimize or maximize `c^T x` subject to `Ax = b` and
//! `x >= 0`, are solved using the two-phase Simplex Method as described in the book Combinatorial
//! Optimization by Christos H. Papadimitriou and Kenneth Steiglitz. A dense tableau is used.
//!
//! ```
//! use tableau_simplex::algorithm::Status;
//! use tableau_simplex::data::linear_program::canonical_form::CanonicalForm;
//!
//! let problem = CanonicalForm::from_target(
//!     vec![vec![1f64, 0f64, 1f64, 0f64, 0f64], vec![0f64, 2f64, 0f64, 1f64, 0f64], vec![1f64, 1f64, 0f64, 0f64, 1f64]],
//!     vec![100f64, 200f64, 150f64],
//!     vec![1f64, 2f64, 0f64, 0f64, 0f64],
//!     "max",
//! )?;
//! let result = problem.solve()?;
//! assert_eq!(result.status(), Status::Optimal);
//! assert_eq!(result.objective_value(), Some(250f64));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
