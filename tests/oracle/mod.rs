//! # Comparison with brute force
//!
//! Random small problems are solved both by the simplex method and by enumerating all bases. The
//! two should agree on the status, and on the optimal value when there is one.
use proptest::collection::vec;
use proptest::prelude::*;

use tableau_simplex::data::linear_program::canonical_form::CanonicalForm;
use tableau_simplex::data::linear_program::elements::Direction;

/// # Generation and execution
mod test;

/// Problems with small integer coefficients, in which degeneracy is common.
///
/// Sometimes a constraint is added that is the sum of the first two, to test the removal of
/// redundant rows.
pub fn problems() -> impl Strategy<Value = CanonicalForm<f64>> {
    (1..=4_usize, 1..=6_usize)
        .prop_flat_map(|(nr_rows, nr_columns)| (
            vec(vec(-3..=3_i32, nr_columns), nr_rows),
            vec(-5..=5_i32, nr_rows),
            vec(-4..=4_i32, nr_columns),
            any::<bool>(),
            any::<bool>(),
        ))
        .prop_map(|(constraints, b, cost, maximize, redundant)| {
            let mut constraints = constraints.into_iter()
                .map(|row| row.into_iter().map(f64::from).collect::<Vec<_>>())
                .collect::<Vec<_>>();
            let mut b = b.into_iter().map(f64::from).collect::<Vec<_>>();
            if redundant && constraints.len() >= 2 {
                let sum = constraints[0].iter().zip(&constraints[1]).map(|(x, y)| x + y).collect();
                constraints.push(sum);
                b.push(b[0] + b[1]);
            }
            let direction = if maximize { Direction::Maximize } else { Direction::Minimize };

            CanonicalForm::new(constraints, b, cost.into_iter().map(f64::from).collect(), direction)
                .expect("dimensions are consistent")
        })
}

/// The same problem, optimized in the opposite direction with the negated cost.
pub fn mirrored(problem: &CanonicalForm<f64>) -> CanonicalForm<f64> {
    CanonicalForm::new(
        problem.constraints().rows().cloned().collect(),
        problem.b().to_vec(),
        problem.cost().into_iter().map(|value| -value).collect(),
        !problem.direction(),
    ).expect("dimensions are unchanged")
}
