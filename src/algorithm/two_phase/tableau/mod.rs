//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is stored densely: for the problems this crate targets, maintaining a factorization
//! of the basis inverse doesn't pay off.
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::algorithm::two_phase::observer::Snapshot;
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::OrderedField;

pub mod kind;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns all data that describes the current basis. The problem it was derived from is not
/// referenced; the phases construct tableaus from it and pass them on by value.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F, K> {
    /// Matrix of size (m + 1) x (nr_columns + 1).
    ///
    /// Row 0 holds the relative costs, rows 1 through m the constraints with respect to the
    /// current basis. The last column holds minus the objective value, followed by the values of
    /// the basic variables.
    matrix: DenseMatrix<F>,

    /// Maps the rows to the column that is basic in it.
    basis_indices: Vec<usize>,

    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading.
    basis_columns: HashSet<usize>,

    /// Whether this tableau has artificial variables (and is in the first phase of the two-phase
    /// algorithm) or not. See the `Kind` trait for more information.
    kind: K,
}

impl<F, K> Tableau<F, K>
where
    F: OrderedField,
    K: Kind,
{
    /// Assemble a tableau.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Cost row, constraint rows and right-hand side, see the `matrix` field.
    /// * `basis_indices`: For each constraint row, the column that is basic in it. Those columns
    /// should form an identity matrix within the constraint rows.
    /// * `kind`: Describes how many of the trailing columns are artificial.
    pub(crate) fn from_parts(matrix: DenseMatrix<F>, basis_indices: Vec<usize>, kind: K) -> Self {
        debug_assert_eq!(matrix.nr_rows(), basis_indices.len() + 1);
        debug_assert!(basis_indices.iter().all(|&j| j + 1 < matrix.nr_columns()));

        let basis_columns = basis_indices.iter().copied().collect::<HashSet<_>>();
        debug_assert_eq!(basis_columns.len(), basis_indices.len(), "Basis columns are not distinct");

        Self { matrix, basis_indices, basis_columns, kind }
    }

    /// Take the tableau apart, keeping the matrix and the basis.
    pub(crate) fn into_parts(self) -> (DenseMatrix<F>, Vec<usize>) {
        (self.matrix, self.basis_indices)
    }

    /// Brings a column into the basis by a pivot on the given row.
    ///
    /// The pivot row is divided by the pivot element, after which multiples of it are subtracted
    /// from all other rows, the cost row included, such that the pivot column becomes a unit
    /// vector.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column to bring into the basis, not yet basic.
    /// * `pivot_row_index`: Constraint row in range `0` until `self.nr_rows()`.
    ///
    /// # Return value
    ///
    /// The index of the column that left the basis.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) -> usize {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let pivot_row = pivot_row_index + 1;
        let pivot_value = self.matrix.get_value(pivot_row, pivot_column_index);
        debug_assert!(pivot_value != F::zero());

        self.matrix.divide_row(pivot_row, pivot_value);
        for row in (0..self.matrix.nr_rows()).filter(|&row| row != pivot_row) {
            let factor = self.matrix.get_value(row, pivot_column_index);
            if factor != F::zero() {
                self.matrix.mul_add_rows(pivot_row, row, -factor);
            }
        }

        self.update_basis_indices(pivot_column_index, pivot_row_index)
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(&mut self, pivot_column: usize, pivot_row: usize) -> usize {
        let leaving_column = self.basis_indices[pivot_row];
        self.basis_indices[pivot_row] = pivot_column;

        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);

        leaving_column
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal ratio between the current constraint value and the column value. When several
    /// rows attain the minimum, the first of them is chosen. There is no anti cycling rule.
    ///
    /// Rows with a column value above `tolerance` are preferred. Only when there are none, any
    /// strictly positive value is accepted, such that `None` means that the column has no
    /// positive value at all.
    ///
    /// # Arguments
    ///
    /// * `column`: Problem column with respect to the current basis with length `m`.
    /// * `tolerance`: Column values at or below this value are only pivoted on as a last resort.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded along this column.
    pub fn select_primal_pivot_row(&self, column: &[F], tolerance: F) -> Option<usize> {
        debug_assert_eq!(column.len(), self.nr_rows());

        self.minimal_ratio_row(column, tolerance)
            .or_else(|| self.minimal_ratio_row(column, F::zero()))
    }

    /// First row with the smallest ratio among the rows with a column value above `threshold`.
    fn minimal_ratio_row(&self, column: &[F], threshold: F) -> Option<usize> {
        column.iter()
            .enumerate()
            .filter(|&(_, &xij)| xij > threshold)
            .map(|(i, &xij)| (i, self.constraint_value(i) / xij))
            .min_by(|(_, ratio), (_, other)| ratio.partial_cmp(other).unwrap_or(Ordering::Equal))
            .map(|(i, _)| i)
    }

    /// The relative cost of a column.
    ///
    /// For basis columns, this is zero. Artificial columns are the exception: their cost entries
    /// are carried along but never read, as artificial variables don't reenter the basis.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(0, j)
    }

    /// Column of original problem with respect to the current basis.
    ///
    /// # Return value
    ///
    /// `Vec` of size `m`.
    pub fn generate_column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns());

        (1..self.matrix.nr_rows()).map(|i| self.matrix.get_value(i, j)).collect()
    }

    /// Single element with respect to the current basis.
    pub fn generate_element(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(i + 1, j)
    }

    /// Value of the variable that is basic in row `i`.
    pub fn constraint_value(&self, i: usize) -> F {
        debug_assert!(i < self.nr_rows());

        self.matrix.get_value(i + 1, self.nr_columns())
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Index of the column that is basic in row `i`.
    pub fn basis_column_index_for_row(&self, i: usize) -> usize {
        self.basis_indices[i]
    }

    /// For each row, the index of the column that is basic in it.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Whether column `j` belongs to an artificial variable.
    pub fn is_artificial(&self, j: usize) -> bool {
        j >= self.nr_structural_columns()
    }

    /// Whether any artificial variable is still basic.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis_indices.iter().any(|&j| self.is_artificial(j))
    }

    /// Get the current basic feasible solution.
    ///
    /// The value of each row is scattered into the position of the variable that is basic in it,
    /// all other variables are zero. Artificial variables are not included.
    ///
    /// # Return value
    ///
    /// `Vec` of size `self.nr_structural_columns()`.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_structural_columns()];
        for (i, &j) in self.basis_indices.iter().enumerate() {
            if !self.is_artificial(j) {
                values[j] = self.constraint_value(i);
            }
        }

        values
    }

    /// Direction in which the solution can move without bound, when no row limits `column`.
    ///
    /// The entering variable increases at rate one, the basic variables change at the rate minus
    /// their entry in the column.
    ///
    /// # Arguments
    ///
    /// * `column_index`: Index of a non basic column with negative relative cost.
    /// * `column`: That column with respect to the current basis, without positive entries.
    pub fn unbounded_direction(&self, column_index: usize, column: &[F]) -> Vec<F> {
        debug_assert_eq!(column.len(), self.nr_rows());
        debug_assert!(column.iter().all(|&value| value <= F::zero()));

        let mut direction = vec![F::zero(); self.nr_structural_columns()];
        direction[column_index] = F::one();
        for (&j, &value) in self.basis_indices.iter().zip(column) {
            if !self.is_artificial(j) {
                direction[j] = -value;
            }
        }

        direction
    }

    /// Get the cost of the current solution.
    ///
    /// # Note
    ///
    /// This function works for both artificial and non-artificial tableaus.
    pub fn objective_function_value(&self) -> F {
        -self.matrix.get_value(0, self.nr_columns())
    }

    /// A read only view of the tableau, to hand to an observer.
    pub fn snapshot(&self, phase: Phase, step: usize) -> Snapshot<'_, F> {
        Snapshot::new(phase, step, &self.matrix, &self.basis_indices)
    }

    /// Number of constraint rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.basis_indices.len()
    }

    /// Number of variables in the problem, artificial variables included.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns() - 1
    }

    /// Number of variables that are not artificial.
    ///
    /// Artificial variables, if any, follow these columns.
    pub fn nr_structural_columns(&self) -> usize {
        self.nr_columns() - self.kind.nr_artificial_variables()
    }

    /// Number of artificial variables.
    pub fn nr_artificial_variables(&self) -> usize {
        self.kind.nr_artificial_variables()
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes. The basis columns should form an identity matrix, and have zero
/// relative cost unless artificial. The constraint values should be nonnegative, which is checked
/// with a loose bound because of rounding.
pub fn is_in_basic_feasible_solution_state<F, K>(tableau: &Tableau<F, K>, tolerance: F) -> bool
where
    F: OrderedField,
    K: Kind,
{
    if tableau.basis_columns.len() != tableau.nr_rows() {
        return false;
    }

    let is_identity = tableau.basis_indices.iter().enumerate().all(|(i, &j)| {
        tableau.generate_column(j).into_iter().enumerate().all(|(k, value)| {
            let expected = if k == i { F::one() } else { F::zero() };
            (value - expected).is_negligible(tolerance)
        })
    });
    let costs_are_zero = tableau.basis_indices.iter()
        .filter(|&&j| !tableau.is_artificial(j))
        .all(|&j| tableau.relative_cost(j).is_negligible(tolerance));

    let values = (0..tableau.nr_rows()).map(|i| tableau.constraint_value(i)).collect::<Vec<_>>();
    let scale = values.iter().fold(F::one(), |largest, value| largest.max(value.abs()));
    let bound = -F::constant(1e-6) * scale;
    let is_feasible = values.into_iter().all(|value| value >= bound);

    is_identity && costs_are_zero && is_feasible
}
