//! # Algorithms
use std::fmt;

use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::OrderedField;

pub use self::error::SolveError;

mod error;
pub mod two_phase;
pub mod utilities;
pub mod vertex_enumeration;

/// Something that can solve a linear program in canonical form.
///
/// Implemented by the simplex engine and by the brute force oracle, such that the two can be
/// swapped and their results compared.
pub trait SolveLinearProgram<F: OrderedField> {
    /// Solve `problem`.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    ///
    /// # Errors
    ///
    /// When the algorithm had to give up before reaching a conclusion.
    fn solve(&mut self, problem: &CanonicalForm<F>) -> Result<OptimizationResult<F>, SolveError>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    /// No point satisfies the constraints.
    Infeasible,
    /// An optimal solution.
    FiniteOptimum(Solution<F>),
    /// The objective can be improved without limit, as witnessed by the ray.
    Unbounded(UnboundedRay<F>),
}

impl<F: OrderedField> OptimizationResult<F> {
    /// Which of the three outcomes this is.
    pub fn status(&self) -> Status {
        match self {
            Self::Infeasible => Status::Infeasible,
            Self::FiniteOptimum(_) => Status::Optimal,
            Self::Unbounded(_) => Status::Unbounded,
        }
    }

    /// The optimal solution, if there is one.
    pub fn solution(&self) -> Option<&Solution<F>> {
        match self {
            Self::FiniteOptimum(solution) => Some(solution),
            _ => None,
        }
    }

    /// The optimal objective value, if there is one.
    pub fn objective_value(&self) -> Option<F> {
        self.solution().map(Solution::objective_value)
    }
}

/// Terminal status of solving a linear program.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Optimal,
    Unbounded,
    Infeasible,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Optimal => "optimal",
            Self::Unbounded => "unbounded",
            Self::Infeasible => "infeasible",
        })
    }
}

/// Certificate of unboundedness: a feasible point and a direction along which the objective
/// improves without limit.
///
/// For every `t >= 0`, `point + t * direction` is feasible. The objective changes by
/// `t * c^T direction`, which is negative for minimization and positive for maximization.
#[derive(Clone, Debug, PartialEq)]
pub struct UnboundedRay<F> {
    point: Vec<F>,
    direction: Vec<F>,
}

impl<F: OrderedField> UnboundedRay<F> {
    /// Create a new ray.
    pub fn new(point: Vec<F>, direction: Vec<F>) -> Self {
        debug_assert_eq!(point.len(), direction.len());

        Self { point, direction }
    }

    /// Feasible point at which the ray starts.
    pub fn point(&self) -> &[F] {
        &self.point
    }

    /// Nonnegative direction in the null space of the constraint matrix.
    pub fn direction(&self) -> &[F] {
        &self.direction
    }

    /// The point reached after moving `step` along the direction.
    pub fn at(&self, step: F) -> Vec<F> {
        self.point.iter()
            .zip(&self.direction)
            .map(|(&x, &d)| x + step * d)
            .collect()
    }
}
