//! # Dense matrices
//!
//! A row major matrix backed by a `Vec<Vec<F>>`, together with the few elimination routines that
//! the algorithms need.
use std::slice::Iter;

use crate::algorithm::utilities::remove_indices;
use crate::data::number_types::traits::OrderedField;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation, apart from
/// the removal of rows.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: OrderedField> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of equal length. Only checked in debug builds; callers validate user input.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);
        Self { data, nr_rows, nr_columns }
    }

    /// Create a matrix with all values equal to zero.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }

    /// Get a single value.
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Overwrite a single value.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Iter<'_, Vec<F>> {
        self.data.iter()
    }

    /// Divide all values in row `i` by `divisor`.
    ///
    /// A value equal to `divisor` becomes exactly one.
    pub fn divide_row(&mut self, i: usize, divisor: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(divisor != F::zero());

        for value in &mut self.data[i] {
            *value = *value / divisor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let addition = factor * self.data[read_row][j];
            self.data[write_row][j] = self.data[write_row][j] + addition;
        }
    }

    /// Remove rows from the matrix.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, deduplicated row indices.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        remove_indices(&mut self.data, indices);
        self.nr_rows = self.data.len();
    }

    /// Compute the matrix vector product `Ax`.
    pub fn mul_vector(&self, x: &[F]) -> Vec<F> {
        debug_assert_eq!(x.len(), self.nr_columns);

        self.data.iter()
            .map(|row| row.iter().zip(x).map(|(&a, &v)| a * v).sum())
            .collect()
    }

    /// The submatrix consisting of the selected columns, in the order given.
    pub fn select_columns(&self, columns: &[usize]) -> Self {
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        let data = self.data.iter()
            .map(|row| columns.iter().map(|&j| row[j]).collect())
            .collect();
        Self { data, nr_rows: self.nr_rows, nr_columns: columns.len() }
    }

    /// The submatrix consisting of the selected rows, in the order given.
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows));

        let data = rows.iter().map(|&i| self.data[i].clone()).collect();
        Self { data, nr_rows: rows.len(), nr_columns: self.nr_columns }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<F>) {
        debug_assert!(self.nr_rows == 0 || row.len() == self.nr_columns);

        if self.nr_rows == 0 {
            self.nr_columns = row.len();
        }
        self.data.push(row);
        self.nr_rows += 1;
    }

    /// Solve the square system `Ax = rhs` by Gaussian elimination with partial pivoting.
    ///
    /// # Return value
    ///
    /// `None` if a pivot of magnitude at most `tolerance` is encountered, that is, if the matrix is
    /// (numerically) singular.
    pub fn solve(&self, rhs: &[F], tolerance: F) -> Option<Vec<F>> {
        debug_assert_eq!(self.nr_rows, self.nr_columns);
        debug_assert_eq!(rhs.len(), self.nr_rows);

        let size = self.nr_rows;
        let mut augmented = self.data.iter()
            .zip(rhs)
            .map(|(row, &value)| {
                let mut row = row.clone();
                row.push(value);
                row
            })
            .collect::<Vec<_>>();

        for k in 0..size {
            let pivot_row = (k..size)
                .max_by(|&i, &j| {
                    augmented[i][k].abs().partial_cmp(&augmented[j][k].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })?;
            if augmented[pivot_row][k].is_negligible(tolerance) {
                return None;
            }
            augmented.swap(k, pivot_row);

            for i in (k + 1)..size {
                let factor = augmented[i][k] / augmented[k][k];
                if factor != F::zero() {
                    for j in k..=size {
                        let subtraction = factor * augmented[k][j];
                        augmented[i][j] = augmented[i][j] - subtraction;
                    }
                }
            }
        }

        let mut x = vec![F::zero(); size];
        for i in (0..size).rev() {
            let known = ((i + 1)..size).map(|j| augmented[i][j] * x[j]).sum::<F>();
            x[i] = (augmented[i][size] - known) / augmented[i][i];
        }

        Some(x)
    }

    /// Select a maximal set of linearly independent rows of the system `Ax = rhs`.
    ///
    /// Rows are considered in order; a row is kept when it is not a linear combination of the rows
    /// kept before it.
    ///
    /// # Return value
    ///
    /// Sorted indices of the rows to keep, or `None` if some dependent row has a right-hand side
    /// that is inconsistent with the rows it depends on: the system has no solution.
    pub fn independent_rows(&self, rhs: &[F], tolerance: F) -> Option<Vec<usize>> {
        debug_assert_eq!(rhs.len(), self.nr_rows);

        // (pivot column, reduced row including the right-hand side)
        let mut reduced: Vec<(usize, Vec<F>)> = Vec::with_capacity(self.nr_rows);
        let mut kept = Vec::with_capacity(self.nr_rows);

        for (i, (row, &value)) in self.data.iter().zip(rhs).enumerate() {
            let mut candidate = row.clone();
            candidate.push(value);

            for (pivot_column, pivot_row) in &reduced {
                let factor = candidate[*pivot_column] / pivot_row[*pivot_column];
                if factor != F::zero() {
                    for (target, &source) in candidate.iter_mut().zip(pivot_row) {
                        *target = *target - factor * source;
                    }
                }
            }

            let largest = (0..self.nr_columns)
                .filter(|&j| !candidate[j].is_negligible(tolerance))
                .max_by(|&j, &k| {
                    candidate[j].abs().partial_cmp(&candidate[k].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            match largest {
                Some(pivot_column) => {
                    reduced.push((pivot_column, candidate));
                    kept.push(i);
                },
                None => if !candidate[self.nr_columns].is_negligible(tolerance) {
                    return None;
                },
            }
        }

        Some(kept)
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

/// If all row lengths agree, return the dimensions of `data`.
fn get_data_dimensions<F>(data: &[Vec<F>]) -> (usize, usize) {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);

    debug_assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_algebra::matrix::DenseMatrix;

    fn test_matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![1f64, 2f64, 0f64],
            vec![0f64, 5f64, 6f64],
        ])
    }

    #[test]
    fn from_data() {
        let m = test_matrix();

        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_eq!(m.get_value(0, 0), 1f64);
        assert_eq!(m.get_value(1, 2), 6f64);
        assert_eq!(m.row(1), &[0f64, 5f64, 6f64]);
    }

    #[test]
    fn zeros() {
        let (rows, columns) = (29, 48);
        let m = DenseMatrix::<f64>::zeros(rows, columns);

        assert_eq!(m.get_value(0, 0), 0f64);
        assert_eq!(m.get_value(rows - 1, columns - 1), 0f64);
    }

    #[test]
    fn row_operations() {
        let mut m = test_matrix();
        m.mul_add_rows(0, 1, -1f64);
        assert_eq!(m.row(1), &[-1f64, 3f64, 6f64]);

        m.set_value(1, 0, 7f64);
        assert_eq!(m.get_value(1, 0), 7f64);

        m.divide_row(1, 3f64);
        assert_eq!(m.get_value(1, 1), 1f64);
        assert_eq!(m.get_value(1, 2), 2f64);
    }

    #[test]
    fn remove_and_select() {
        let mut m = DenseMatrix::from_data(vec![
            vec![1f64, 2f64],
            vec![3f64, 4f64],
            vec![5f64, 6f64],
        ]);
        m.remove_rows(&[1]);
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.row(1), &[5f64, 6f64]);

        let selected = m.select_columns(&[1]);
        assert_eq!(selected.nr_columns(), 1);
        assert_eq!(selected.row(1), &[6f64]);
    }

    #[test]
    fn mul_vector() {
        let m = test_matrix();
        assert_eq!(m.mul_vector(&[1f64, 1f64, 1f64]), vec![3f64, 11f64]);
    }

    #[test]
    fn solve() {
        let m = DenseMatrix::from_data(vec![
            vec![0f64, 2f64, 1f64],
            vec![1f64, 1f64, 0f64],
            vec![3f64, 0f64, 1f64],
        ]);
        let x = m.solve(&[5f64, 3f64, 6f64], 1e-12).unwrap();
        assert_abs_diff_eq!(x[0], 1.4f64, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 1.6f64, epsilon = 1e-12);
        assert_abs_diff_eq!(x[2], 1.8f64, epsilon = 1e-12);

        let singular = DenseMatrix::from_data(vec![
            vec![1f64, 2f64],
            vec![2f64, 4f64],
        ]);
        assert_eq!(singular.solve(&[1f64, 2f64], 1e-12), None);
    }

    #[test]
    fn independent_rows() {
        let m = DenseMatrix::from_data(vec![
            vec![1f64, 1f64, 0f64],
            vec![0f64, 1f64, 1f64],
            vec![1f64, 2f64, 1f64],
        ]);
        assert_eq!(m.independent_rows(&[1f64, 2f64, 3f64], 1e-9), Some(vec![0, 1]));
        assert_eq!(m.independent_rows(&[1f64, 2f64, 4f64], 1e-9), None);

        let full_rank = test_matrix();
        assert_eq!(full_rank.independent_rows(&[0f64, 0f64], 1e-9), Some(vec![0, 1]));
    }
}
