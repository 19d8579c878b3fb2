//! # Errors raised while solving
//!
//! Infeasibility and unboundedness are not errors; they are reported through
//! `OptimizationResult`. The errors here mean that an algorithm gave up before it could classify
//! the problem.
use thiserror::Error;

use crate::algorithm::two_phase::Phase;

/// An algorithm stopped without reaching a conclusion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The pivot limit was reached, typically because the simplex method is cycling on a
    /// degenerate problem.
    #[error("reached the limit of {iterations} pivots in phase {phase}")]
    IterationLimit {
        /// Phase in which the limit was hit.
        phase: Phase,
        /// Number of pivots performed in that phase.
        iterations: usize,
    },
    /// The artificial objective, which is bounded from below by zero, was reported to be
    /// unbounded. Only rounding errors can cause this.
    #[error("the artificial objective appears unbounded, the problem is numerically ill-conditioned")]
    ArtificialUnbounded,
    /// The brute force oracle would need to examine more bases than it is allowed to.
    #[error("enumeration needs {bases} bases, more than the configured limit")]
    EnumerationLimit {
        /// Number of candidate bases.
        bases: usize,
    },
}
