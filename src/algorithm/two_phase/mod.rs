//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapter 2 of Combinatorial Optimization, a book by
//! Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! The first phase finds a basic feasible solution using artificial variables, or proves that none
//! exists. The second phase starts from that solution and optimizes the actual cost. Both phases
//! share the pivoting loop in this module.
use std::fmt;
use std::marker::PhantomData;

use enum_map::{Enum, EnumMap};
use itertools::Itertools;
use log::{debug, trace};

use crate::algorithm::{OptimizationResult, SolveError, SolveLinearProgram};
use crate::algorithm::two_phase::observer::{Observer, Pivot};
use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::phase_two::OptimizationOutcome;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::OrderedField;

pub mod observer;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;


/// The two phases of the method.
#[allow(missing_docs)]
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    One,
    Two,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::One => "1",
            Self::Two => "2",
        })
    }
}

/// Settings that influence a solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverOptions<F> {
    /// Maximum number of pivots in each of the phases.
    pub max_iterations: usize,
    /// Values with at most this magnitude are treated as zero when choosing pivots and when
    /// deciding feasibility.
    pub tolerance: F,
}

impl<F: OrderedField> Default for SolverOptions<F> {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            tolerance: F::constant(1e-10),
        }
    }
}

impl<F: OrderedField> SolverOptions<F> {
    /// Replace the pivot limit.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replace the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        debug_assert!(tolerance >= F::zero());

        self.tolerance = tolerance;
        self
    }
}

/// The two-phase simplex method, configured with options, a pivot rule and an observer.
///
/// # Example
///
/// ```
/// use tableau_simplex::algorithm::{SolveLinearProgram, Status};
/// use tableau_simplex::algorithm::two_phase::observer::Trajectory;
/// use tableau_simplex::algorithm::two_phase::TwoPhase;
/// use tableau_simplex::data::linear_program::canonical_form::CanonicalForm;
/// use tableau_simplex::data::linear_program::elements::Direction;
///
/// let problem = CanonicalForm::new(
///     vec![vec![1f64, 1f64, 1f64]],
///     vec![1f64],
///     vec![1f64, 2f64, 3f64],
///     Direction::Maximize,
/// )?;
/// let mut engine = TwoPhase::<f64>::new().with_observer(Trajectory::new());
/// let result = engine.solve(&problem)?;
/// assert_eq!(result.status(), Status::Optimal);
/// assert_eq!(result.objective_value(), Some(3f64));
/// assert!(!engine.observer().events().is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct TwoPhase<F, PR = FirstProfitable, O = ()> {
    options: SolverOptions<F>,
    observer: O,
    pivot_rule: PhantomData<fn() -> PR>,
}

impl<F: OrderedField> TwoPhase<F> {
    /// Default options, the `FirstProfitable` rule and no observer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: OrderedField> Default for TwoPhase<F> {
    fn default() -> Self {
        Self {
            options: SolverOptions::default(),
            observer: (),
            pivot_rule: PhantomData,
        }
    }
}

impl<F, PR, O> TwoPhase<F, PR, O>
where
    F: OrderedField,
    PR: PivotRule,
    O: Observer<F>,
{
    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: SolverOptions<F>) -> Self {
        self.options = options;
        self
    }

    /// Use a different pivot rule.
    #[must_use]
    pub fn with_pivot_rule<R: PivotRule>(self) -> TwoPhase<F, R, O> {
        TwoPhase {
            options: self.options,
            observer: self.observer,
            pivot_rule: PhantomData,
        }
    }

    /// Report progress to `observer`.
    #[must_use]
    pub fn with_observer<P: Observer<F>>(self, observer: P) -> TwoPhase<F, PR, P> {
        TwoPhase {
            options: self.options,
            observer,
            pivot_rule: PhantomData,
        }
    }

    /// Current options.
    pub fn options(&self) -> &SolverOptions<F> {
        &self.options
    }

    /// The observer, with whatever it collected so far.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the engine, keeping the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

impl<F, PR, O> SolveLinearProgram<F> for TwoPhase<F, PR, O>
where
    F: OrderedField,
    PR: PivotRule,
    O: Observer<F>,
{
    fn solve(&mut self, problem: &CanonicalForm<F>) -> Result<OptimizationResult<F>, SolveError> {
        solve::<_, PR, _>(problem, &self.options, &mut self.observer)
    }
}

impl<F: OrderedField> CanonicalForm<F> {
    /// Solve this problem with the two-phase simplex method using default settings.
    ///
    /// # Errors
    ///
    /// When the pivot limit is reached, or the first phase breaks down numerically.
    pub fn solve(&self) -> Result<OptimizationResult<F>, SolveError> {
        solve::<_, FirstProfitable, _>(self, &SolverOptions::default(), &mut ())
    }
}

/// Solve a problem with the two-phase simplex method.
///
/// # Arguments
///
/// * `problem`: Problem to solve, it is not modified.
/// * `options`: Pivot limit and tolerance.
/// * `observer`: Is notified of every pivot and of the start and end of each phase.
///
/// # Return value
///
/// Whether the problem is infeasible, unbounded or has an optimal solution.
///
/// # Errors
///
/// When the pivot limit is reached in either phase, or when the artificial problem of the first
/// phase appears to be unbounded because of rounding errors.
pub fn solve<F, PR, O>(
    problem: &CanonicalForm<F>,
    options: &SolverOptions<F>,
    observer: &mut O,
) -> Result<OptimizationResult<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule,
    O: Observer<F>,
{
    debug!(
        "Solving a problem with {} constraints and {} variables ({})",
        problem.nr_constraints(), problem.nr_variables(), problem.direction(),
    );
    let mut iterations = EnumMap::default();

    let mut context = Context::new(Phase::One, options, observer);
    let feasibility = phase_one::primal::<_, PR, _>(phase_one::artificial_tableau(problem), &mut context)?;
    iterations[Phase::One] = context.steps();

    let (rank, artificial_tableau) = match feasibility {
        RankedFeasibilityResult::Feasible { rank, tableau } => (rank, tableau),
        RankedFeasibilityResult::Infeasible => {
            debug!("Problem is infeasible, found after {} pivots", iterations[Phase::One]);
            return Ok(OptimizationResult::Infeasible);
        },
    };
    if let Rank::Deficient(rows) = &rank {
        debug!("Removing redundant rows [{}]", rows.iter().join(", "));
    }

    let tableau = phase_two::tableau_from_artificial(artificial_tableau, &rank, problem);
    let mut context = Context::new(Phase::Two, options, observer);
    let outcome = phase_two::primal::<_, PR, _>(tableau, &mut context)?;
    iterations[Phase::Two] = context.steps();

    let result = match outcome {
        OptimizationOutcome::FiniteOptimum(tableau) => {
            let objective_value = problem.reported_objective_value(tableau.objective_function_value());
            let values = tableau.current_bfs();
            let (_, basis) = tableau.into_parts();
            OptimizationResult::FiniteOptimum(Solution::new(objective_value, values, basis, iterations))
        },
        OptimizationOutcome::Unbounded(ray) => OptimizationResult::Unbounded(ray),
    };
    debug!(
        "Problem is {} after {} + {} pivots",
        result.status(), iterations[Phase::One], iterations[Phase::Two],
    );

    Ok(result)
}

/// State of a single phase: where to report to, and how many pivots were made.
pub(crate) struct Context<'a, F, O> {
    phase: Phase,
    options: &'a SolverOptions<F>,
    observer: &'a mut O,
    steps: usize,
}

impl<'a, F, O> Context<'a, F, O>
where
    F: OrderedField,
    O: Observer<F>,
{
    pub(crate) fn new(phase: Phase, options: &'a SolverOptions<F>, observer: &'a mut O) -> Self {
        Self { phase, options, observer, steps: 0 }
    }

    pub(crate) fn tolerance(&self) -> F {
        self.options.tolerance
    }

    /// Number of pivots performed in this phase.
    pub(crate) fn steps(&self) -> usize {
        self.steps
    }

    pub(crate) fn started<K: Kind>(&mut self, tableau: &Tableau<F, K>) {
        self.observer.phase_started(&tableau.snapshot(self.phase, self.steps));
    }

    pub(crate) fn finished<K: Kind>(&mut self, tableau: &Tableau<F, K>) {
        self.observer.phase_finished(&tableau.snapshot(self.phase, self.steps));
    }

    /// Pivot and notify the observer.
    ///
    /// # Errors
    ///
    /// If the pivot limit was already reached; the tableau is then left unchanged.
    pub(crate) fn pivot<K: Kind>(
        &mut self,
        tableau: &mut Tableau<F, K>,
        column_index: usize,
        row_index: usize,
    ) -> Result<(), SolveError> {
        if self.steps >= self.options.max_iterations {
            debug!("Phase {} reached the pivot limit of {}", self.phase, self.options.max_iterations);
            return Err(SolveError::IterationLimit { phase: self.phase, iterations: self.steps });
        }

        let leaving = tableau.bring_into_basis(column_index, row_index);
        self.steps += 1;
        trace!(
            "Phase {} pivot {}: column {} replaces column {} in row {}",
            self.phase, self.steps, column_index, leaving, row_index,
        );

        let pivot = Pivot { entering: column_index, leaving, row: row_index };
        self.observer.pivoted(pivot, &tableau.snapshot(self.phase, self.steps));

        Ok(())
    }
}

/// How the pivoting loop ended.
#[derive(Debug, PartialEq)]
pub(crate) enum PrimalOutcome<F> {
    /// No column has a negative relative cost.
    Optimal,
    /// No row limits the entering column.
    Unbounded {
        /// Index of the entering column.
        column_index: usize,
        /// That column with respect to the final basis, without positive values.
        column: Vec<F>,
    },
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Return value
///
/// Whether the minimum is finite. The tableau is left in the final basis.
///
/// # Errors
///
/// If the pivot limit is reached.
pub(crate) fn primal<F, K, PR, O>(
    tableau: &mut Tableau<F, K>,
    rule: &mut PR,
    context: &mut Context<'_, F, O>,
) -> Result<PrimalOutcome<F>, SolveError>
where
    F: OrderedField,
    K: Kind,
    PR: PivotRule,
    O: Observer<F>,
{
    let tolerance = context.tolerance();
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau, tolerance));

        match rule.select_primal_pivot_column(tableau, tolerance) {
            Some((column_index, _cost)) => {
                let column = tableau.generate_column(column_index);
                match tableau.select_primal_pivot_row(&column, tolerance) {
                    Some(row_index) => context.pivot(tableau, column_index, row_index)?,
                    None => break Ok(PrimalOutcome::Unbounded { column_index, column }),
                }
            },
            None => break Ok(PrimalOutcome::Optimal),
        }
    }
}
