//! # Canonical form
//!
//! A linear program in `CanonicalForm` has only equality constraints and nonnegative variables:
//!
//! ```text
//! min (or max) c^T x
//! s.t.         A x = b
//!                x >= 0
//! ```
//!
//! The constraint vector `b` may contain negative values; the algorithms take care of that.
use std::str::FromStr;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::Direction;
use crate::data::linear_program::error::{DimensionError, ProblemError};
use crate::data::number_types::traits::OrderedField;

/// Immutable description of a linear program in canonical form.
///
/// The algorithms always minimize. To that end, the cost vector is stored as the cost of the
/// equivalent minimization problem: negated once, at construction, for maximization problems.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalForm<F> {
    constraints: DenseMatrix<F>,
    b: Vec<F>,
    minimization_cost: Vec<F>,
    direction: Direction,
}

impl<F: OrderedField> CanonicalForm<F> {
    /// Create a new linear program in canonical form.
    ///
    /// # Arguments
    ///
    /// * `constraints`: The rows of the constraint matrix `A`, all of equal length `n`.
    /// * `b`: Constraint values, one for each row of `A`.
    /// * `cost`: Objective function coefficients, one for each column of `A`.
    /// * `direction`: Whether `cost` should be minimized or maximized.
    ///
    /// # Errors
    ///
    /// A `DimensionError` if the sizes don't match up, or if there are no rows or no columns.
    pub fn new(
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
        cost: Vec<F>,
        direction: Direction,
    ) -> Result<Self, DimensionError> {
        let nr_rows = constraints.len();
        let nr_columns = constraints.first().map_or(0, Vec::len);
        if nr_rows == 0 || nr_columns == 0 {
            return Err(DimensionError::Empty { nr_rows, nr_columns });
        }
        if let Some((row, length)) = constraints.iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, length)| length != nr_columns) {
            return Err(DimensionError::RaggedRow { row, length, expected: nr_columns });
        }
        if b.len() != nr_rows {
            return Err(DimensionError::ConstraintValues { length: b.len(), expected: nr_rows });
        }
        if cost.len() != nr_columns {
            return Err(DimensionError::Cost { length: cost.len(), expected: nr_columns });
        }

        let minimization_cost = match direction {
            Direction::Minimize => cost,
            Direction::Maximize => cost.into_iter().map(|value| -value).collect(),
        };

        Ok(Self {
            constraints: DenseMatrix::from_data(constraints),
            b,
            minimization_cost,
            direction,
        })
    }

    /// Create a new linear program, reading the direction from a textual target such as `"min"`
    /// or `"max"`.
    ///
    /// # Errors
    ///
    /// A `ProblemError` wrapping either a `DimensionError` or an `InvalidDirectionError`.
    pub fn from_target(
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
        cost: Vec<F>,
        target: &str,
    ) -> Result<Self, ProblemError> {
        let direction = Direction::from_str(target)?;
        Ok(Self::new(constraints, b, cost, direction)?)
    }

    /// The constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// The constraint values `b`.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// The cost vector `c` as it was provided.
    pub fn cost(&self) -> Vec<F> {
        match self.direction {
            Direction::Minimize => self.minimization_cost.clone(),
            Direction::Maximize => self.minimization_cost.iter().map(|&value| -value).collect(),
        }
    }

    /// Cost vector of the equivalent minimization problem.
    pub fn minimization_cost(&self) -> &[F] {
        &self.minimization_cost
    }

    /// Direction of optimization.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of constraints, `m`.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of variables, `n`.
    pub fn nr_variables(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// Translate an objective value of the internal minimization problem to the direction the
    /// caller asked for.
    pub fn reported_objective_value(&self, minimized: F) -> F {
        match self.direction {
            Direction::Minimize => minimized,
            Direction::Maximize => -minimized,
        }
    }

    /// Evaluate `c^T x` with the cost as it was provided.
    pub fn objective_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        let minimized = self.minimization_cost.iter().zip(x).map(|(&c, &v)| c * v).sum();
        self.reported_objective_value(minimized)
    }

    /// Largest absolute violation of `Ax = b` by `x`.
    ///
    /// Nonnegativity of `x` is not considered.
    pub fn constraint_violation(&self, x: &[F]) -> F {
        self.constraints.mul_vector(x).into_iter()
            .zip(&self.b)
            .map(|(lhs, &rhs)| (lhs - rhs).abs())
            .fold(F::zero(), F::max)
    }
}
