//! # Representation of optimal solutions
//!
//! Once a linear program is solved to optimality, the values of all variables, the objective value
//! and some information on how the solution was reached are collected here.
use enum_map::EnumMap;

use crate::algorithm::two_phase::Phase;
use crate::data::number_types::traits::OrderedField;

/// An optimal solution to a linear program in canonical form.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function, in the direction of optimization that was requested.
    objective_value: F,
    /// A value for each variable of the problem.
    values: Vec<F>,
    /// For each remaining constraint row, the variable that is basic in it.
    basis: Vec<usize>,
    /// Number of pivots that were performed in each phase.
    iterations: EnumMap<Phase, usize>,
}

impl<F: OrderedField> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(
        objective_value: F,
        values: Vec<F>,
        basis: Vec<usize>,
        iterations: EnumMap<Phase, usize>,
    ) -> Self {
        debug_assert!(basis.iter().all(|&j| j < values.len()));

        Self { objective_value, values, basis, iterations }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Values of all variables, indexed like the columns of the problem.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Variables in the final basis, one for each constraint row that was not redundant.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Number of pivots performed during `phase`.
    pub fn iterations(&self, phase: Phase) -> usize {
        self.iterations[phase]
    }

    /// Total number of pivots performed.
    pub fn total_iterations(&self) -> usize {
        self.iterations.values().sum()
    }
}
