//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use std::cmp::Ordering;

use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision
/// is made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// Only columns of variables that are not artificial are considered: once an artificial
    /// variable leaves the basis, it doesn't come back.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau in a basic feasible solution state.
    /// * `tolerance`: Relative costs need to be below minus this value to be considered negative.
    ///
    /// # Return value
    ///
    /// Index of the entering column and its relative cost, or `None` when the current basis is
    /// optimal.
    fn select_primal_pivot_column<F, K>(
        &mut self,
        tableau: &Tableau<F, K>,
        tolerance: F,
    ) -> Option<(usize, F)>
    where
        F: OrderedField,
        K: Kind,
    ;
}

/// All non basic, non artificial columns with a negative relative cost, in order.
fn candidates<F, K>(tableau: &Tableau<F, K>, tolerance: F) -> impl Iterator<Item = (usize, F)> + '_
where
    F: OrderedField,
    K: Kind,
{
    (0..tableau.nr_structural_columns())
        .filter(move |&column| !tableau.is_in_basis(column))
        .map(move |column| (column, tableau.relative_cost(column)))
        .filter(move |&(_, cost)| cost < -tolerance)
}

/// Simply pivot on the first column, which has a negative relative cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F, K>(
        &mut self,
        tableau: &Tableau<F, K>,
        tolerance: F,
    ) -> Option<(usize, F)>
    where
        F: OrderedField,
        K: Kind,
    {
        candidates(tableau, tolerance).next()
    }
}

/// Pivot on the column with the most negative relative cost.
///
/// Ties are broken in favor of the lowest column index.
#[derive(Clone, Copy, Debug, Default)]
pub struct SteepestDescentAlongVariable;

impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F, K>(
        &mut self,
        tableau: &Tableau<F, K>,
        tolerance: F,
    ) -> Option<(usize, F)>
    where
        F: OrderedField,
        K: Kind,
    {
        candidates(tableau, tolerance)
            .min_by(|(_, cost), (_, other)| cost.partial_cmp(other).unwrap_or(Ordering::Equal))
    }
}
