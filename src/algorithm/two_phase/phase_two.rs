//! # Phase two: optimizing
//!
//! Starting from the basic feasible solution found in the first phase, the actual cost is
//! minimized.
use std::iter::once;

use crate::algorithm::{SolveError, UnboundedRay};
use crate::algorithm::two_phase::{Context, primal as primal_loop, PrimalOutcome};
use crate::algorithm::two_phase::observer::Observer;
use crate::algorithm::two_phase::phase_one::Rank;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::{Artificial, NonArtificial};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::utilities::remove_indices;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::OrderedField;

/// Create the tableau of the second phase from the final tableau of the first phase.
///
/// Redundant rows are removed, as are the artificial columns. The constraint rows of the first
/// phase equal `B^-1 A` and `B^-1 b` for the current basis `B`, from which the relative cost
/// `c^T - c_B^T B^-1 A` and the cost `c_B^T B^-1 b` of the basic feasible solution follow.
///
/// # Arguments
///
/// * `artificial_tableau`: No artificial variables are basic, apart from those in the rows listed
/// by `rank`.
/// * `rank`: Rows to remove, if any.
/// * `problem`: Provides the cost, in minimization form.
pub fn tableau_from_artificial<F: OrderedField>(
    artificial_tableau: Tableau<F, Artificial>,
    rank: &Rank,
    problem: &CanonicalForm<F>,
) -> Tableau<F, NonArtificial> {
    let nr_variables = artificial_tableau.nr_structural_columns();
    debug_assert_eq!(nr_variables, problem.nr_variables());
    let (matrix, mut basis_indices) = artificial_tableau.into_parts();

    let rhs_column = matrix.nr_columns() - 1;
    let columns = (0..nr_variables).chain(once(rhs_column)).collect::<Vec<_>>();
    let mut matrix = matrix.select_columns(&columns);
    if let Rank::Deficient(rows) = rank {
        let tableau_rows = rows.iter().map(|&i| i + 1).collect::<Vec<_>>();
        matrix.remove_rows(&tableau_rows);
        remove_indices(&mut basis_indices, rows);
    }
    debug_assert!(basis_indices.iter().all(|&j| j < nr_variables));

    let cost = problem.minimization_cost();
    for j in 0..=nr_variables {
        let own_cost = if j < nr_variables { cost[j] } else { F::zero() };
        let relative_cost = basis_indices.iter()
            .enumerate()
            .fold(own_cost, |total, (i, &basic)| total - cost[basic] * matrix.get_value(i + 1, j));
        matrix.set_value(0, j, relative_cost);
    }

    Tableau::from_parts(matrix, basis_indices, NonArtificial)
}

/// The second phase ends with an optimal basis, or with a direction of unboundedness.
#[derive(Debug, PartialEq)]
pub enum OptimizationOutcome<F> {
    /// The tableau in an optimal basis.
    FiniteOptimum(Tableau<F, NonArtificial>),
    /// The cost decreases without limit along the ray.
    Unbounded(UnboundedRay<F>),
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// # Arguments
///
/// * `tableau`: Tableau in a basic feasible solution state.
/// * `context`: Options and observer of the second phase.
///
/// # Return value
///
/// The final tableau when the optimum is finite. It can't be infeasible, as a feasible solution
/// is needed to start using this method.
///
/// # Errors
///
/// If the pivot limit is reached.
pub(crate) fn primal<F, PR, O>(
    mut tableau: Tableau<F, NonArtificial>,
    context: &mut Context<'_, F, O>,
) -> Result<OptimizationOutcome<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule,
    O: Observer<F>,
{
    context.started(&tableau);

    let mut rule = PR::new();
    let outcome = match primal_loop(&mut tableau, &mut rule, context)? {
        PrimalOutcome::Optimal => {
            context.finished(&tableau);
            OptimizationOutcome::FiniteOptimum(tableau)
        },
        PrimalOutcome::Unbounded { column_index, column } => {
            context.finished(&tableau);
            let direction = tableau.unbounded_direction(column_index, &column);
            OptimizationOutcome::Unbounded(UnboundedRay::new(tableau.current_bfs(), direction))
        },
    };

    Ok(outcome)
}
