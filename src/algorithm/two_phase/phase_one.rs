//! # Phase one: finding a basic feasible solution
//!
//! An artificial variable is added for each constraint, such that the artificial variables form
//! an initial basis. Minimizing their sum either drives them all to zero, giving a basic feasible
//! solution of the original problem, or proves that there is none.
use crate::algorithm::SolveError;
use crate::algorithm::two_phase::{Context, primal as primal_loop, PrimalOutcome};
use crate::algorithm::two_phase::observer::Observer;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::Artificial;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::OrderedField;

/// Create the tableau of the artificial problem.
///
/// Constraints with a negative right-hand side are multiplied by minus one first, such that the
/// artificial variables can start at a nonnegative value. The tableau then reads
///
/// ```text
/// [ -1^T A | 1 ... 1 | -1^T b ]
/// [    A   |    I    |    b   ]
/// ```
///
/// with the artificial variables basic.
pub fn artificial_tableau<F: OrderedField>(problem: &CanonicalForm<F>) -> Tableau<F, Artificial> {
    let nr_rows = problem.nr_constraints();
    let nr_variables = problem.nr_variables();
    let nr_columns = nr_variables + nr_rows;

    let mut matrix = DenseMatrix::zeros(nr_rows + 1, nr_columns + 1);
    for (i, &b) in problem.b().iter().enumerate() {
        let sign = if b < F::zero() { -F::one() } else { F::one() };
        for (j, &value) in problem.constraints().row(i).iter().enumerate() {
            matrix.set_value(i + 1, j, sign * value);
        }
        matrix.set_value(i + 1, nr_variables + i, F::one());
        matrix.set_value(i + 1, nr_columns, sign * b);
    }

    for j in (0..nr_variables).chain([nr_columns]) {
        let total = (1..=nr_rows).map(|i| matrix.get_value(i, j)).sum::<F>();
        matrix.set_value(0, j, -total);
    }
    for j in nr_variables..nr_columns {
        matrix.set_value(0, j, F::one());
    }

    Tableau::from_parts(matrix, (nr_variables..nr_columns).collect(), Artificial::new(nr_rows))
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the canonical form linear program is found.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau with a valid basis. This basis will typically consist of only
/// artificial variables.
/// * `context`: Options and observer of the first phase.
///
/// # Return value
///
/// Whether the tableau allows a basic feasible solution without artificial variables. If so, the
/// tableau is returned with all artificial variables out of the basis, apart from those in
/// redundant rows.
///
/// # Errors
///
/// If the pivot limit is reached, or if the artificial cost appears to be unbounded.
pub(crate) fn primal<F, PR, O>(
    mut tableau: Tableau<F, Artificial>,
    context: &mut Context<'_, F, O>,
) -> Result<RankedFeasibilityResult<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule,
    O: Observer<F>,
{
    context.started(&tableau);

    let mut rule = PR::new();
    if let PrimalOutcome::Unbounded { .. } = primal_loop(&mut tableau, &mut rule, context)? {
        // The artificial cost is bounded from below by zero
        return Err(SolveError::ArtificialUnbounded);
    }

    let result = if tableau.objective_function_value().abs() > context.tolerance() {
        context.finished(&tableau);
        RankedFeasibilityResult::Infeasible
    } else {
        let rank = if tableau.has_artificial_in_basis() {
            let rows_to_remove = remove_artificial_basis_variables(&mut tableau, context)?;
            if rows_to_remove.is_empty() {
                Rank::Full
            } else {
                Rank::Deficient(rows_to_remove)
            }
        } else {
            Rank::Full
        };

        context.finished(&tableau);
        RankedFeasibilityResult::Feasible { rank, tableau }
    };

    Ok(result)
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, PartialEq)]
pub enum RankedFeasibilityResult<F> {
    /// The problem is feasible and the tableau is in a basic feasible solution state.
    Feasible {
        /// Whether the problem needs rows to be removed.
        rank: Rank,
        /// Final tableau of the first phase.
        ///
        /// Artificial variables are only basic in the rows listed by `rank`.
        tableau: Tableau<F, Artificial>,
    },
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Removes all artificial variables from the tableau by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// For each row in which an artificial variable is basic, the first non basic, non artificial
/// column with a nonzero value in that row is pivoted in. When no such column exists, the row is
/// a linear combination of the other rows.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for, with an artificial cost of zero.
/// * `context`: The pivots count towards the first phase.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant. Is sorted as a side effect of the algorithm.
fn remove_artificial_basis_variables<F, O>(
    tableau: &mut Tableau<F, Artificial>,
    context: &mut Context<'_, F, O>,
) -> Result<Vec<usize>, SolveError>
where
    F: OrderedField,
    O: Observer<F>,
{
    let tolerance = context.tolerance();
    let mut rows_to_remove = Vec::new();

    for pivot_row in 0..tableau.nr_rows() {
        if !tableau.is_artificial(tableau.basis_column_index_for_row(pivot_row)) {
            continue;
        }

        let pivot_column = (0..tableau.nr_structural_columns())
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| !tableau.generate_element(pivot_row, j).is_negligible(tolerance));

        match pivot_column {
            Some(pivot_column) => context.pivot(tableau, pivot_column, pivot_row)?,
            None => rows_to_remove.push(pivot_row),
        }
    }

    debug_assert!(rows_to_remove.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(rows_to_remove)
}
