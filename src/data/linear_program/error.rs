//! # Errors raised while constructing a linear program
//!
//! These errors describe malformed input. They are never used for programs that are well formed
//! but infeasible or unbounded; those are results of solving, see `OptimizationResult`.
use thiserror::Error;

/// The sizes of `A`, `b` and `c` don't describe a linear program in canonical form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// Either there are no constraints or there are no variables.
    #[error("a linear program needs at least one constraint and one variable, got {nr_rows} x {nr_columns}")]
    Empty {
        /// Number of rows of `A`.
        nr_rows: usize,
        /// Number of columns of `A`.
        nr_columns: usize,
    },
    /// A row of the constraint matrix has a different length than the first row.
    #[error("row {row} of the constraint matrix has length {length}, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        length: usize,
        /// Length of the first row.
        expected: usize,
    },
    /// The length of `b` differs from the number of rows of `A`.
    #[error("b has length {length} but the constraint matrix has {expected} rows")]
    ConstraintValues {
        /// Length of `b`.
        length: usize,
        /// Number of rows of `A`.
        expected: usize,
    },
    /// The length of `c` differs from the number of columns of `A`.
    #[error("c has length {length} but the constraint matrix has {expected} columns")]
    Cost {
        /// Length of `c`.
        length: usize,
        /// Number of columns of `A`.
        expected: usize,
    },
}

/// The optimization target is neither of the accepted minimization or maximization names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid optimization direction {given:?}, expected one of min, minimize, max or maximize")]
pub struct InvalidDirectionError {
    given: String,
}

impl InvalidDirectionError {
    /// Wrap the text that was rejected.
    pub fn new(given: impl Into<String>) -> Self {
        Self { given: given.into() }
    }

    /// The text that was rejected.
    pub fn given(&self) -> &str {
        &self.given
    }
}

/// Any reason why a linear program couldn't be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[allow(missing_docs)]
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[allow(missing_docs)]
    #[error(transparent)]
    InvalidDirection(#[from] InvalidDirectionError),
}
