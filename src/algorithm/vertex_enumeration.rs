//! # Solving by enumeration
//!
//! A linear program in canonical form that has an optimal solution has an optimal basic feasible
//! solution, and a feasible problem that is unbounded has an improving extreme ray. Both are
//! found here by trying all choices of basis columns. This is only practical for small problems,
//! and shares no code with the simplex method, which makes it a good reference to test against.
use std::cmp::Ordering;

use enum_map::EnumMap;
use itertools::Itertools;
use log::debug;

use crate::algorithm::{OptimizationResult, SolveError, SolveLinearProgram, UnboundedRay};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::OrderedField;

/// Brute force solver, examining every basis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexEnumeration<F> {
    tolerance: F,
    max_bases: usize,
}

impl<F: OrderedField> Default for VertexEnumeration<F> {
    fn default() -> Self {
        Self {
            tolerance: F::constant(1e-9),
            max_bases: 1_000_000,
        }
    }
}

impl<F: OrderedField> VertexEnumeration<F> {
    /// Default tolerance and limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values with at most this magnitude are treated as zero.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Refuse problems that would need more than `max_bases` bases to be examined.
    #[must_use]
    pub fn with_max_bases(mut self, max_bases: usize) -> Self {
        self.max_bases = max_bases;
        self
    }

    /// All basic solutions of `Ax = b` that are nonnegative.
    ///
    /// The rows of `A` should be linearly independent.
    ///
    /// # Return value
    ///
    /// Tuples of the basis columns and the full solution vector, in lexicographic order of the
    /// basis columns.
    fn basic_feasible_solutions<'a>(
        &'a self,
        constraints: &'a DenseMatrix<F>,
        b: &'a [F],
    ) -> impl Iterator<Item = (Vec<usize>, Vec<F>)> + 'a {
        (0..constraints.nr_columns())
            .combinations(constraints.nr_rows())
            .filter_map(move |columns| {
                let values = constraints.select_columns(&columns).solve(b, self.tolerance)?;
                if values.iter().any(|&value| value < -self.tolerance) {
                    return None;
                }

                let mut x = vec![F::zero(); constraints.nr_columns()];
                for (&j, value) in columns.iter().zip(values) {
                    x[j] = value.max(F::zero());
                }
                Some((columns, x))
            })
    }

    /// Check the number of bases that would be examined against the limit.
    fn check_limit(&self, nr_columns: usize, nr_rows: usize) -> Result<(), SolveError> {
        let bases = binomial(nr_columns, nr_rows);
        if bases > self.max_bases {
            Err(SolveError::EnumerationLimit { bases })
        } else {
            Ok(())
        }
    }
}

impl<F: OrderedField> SolveLinearProgram<F> for VertexEnumeration<F> {
    fn solve(&mut self, problem: &CanonicalForm<F>) -> Result<OptimizationResult<F>, SolveError> {
        let cost = problem.minimization_cost();
        let evaluate = |x: &[F]| cost.iter().zip(x).map(|(&c, &v)| c * v).sum::<F>();

        let Some(rows) = problem.constraints().independent_rows(problem.b(), self.tolerance) else {
            debug!("Constraints are inconsistent");
            return Ok(OptimizationResult::Infeasible);
        };
        let constraints = problem.constraints().select_rows(&rows);
        let b = rows.iter().map(|&i| problem.b()[i]).collect::<Vec<_>>();
        self.check_limit(constraints.nr_columns(), constraints.nr_rows())?;

        let best = self.basic_feasible_solutions(&constraints, &b)
            .map(|(basis, x)| (evaluate(&x), basis, x))
            .min_by(|(cost, ..), (other, ..)| {
                // The first vertex wins ties
                if (*cost - *other).is_negligible(self.tolerance) {
                    Ordering::Equal
                } else {
                    cost.partial_cmp(other).unwrap_or(Ordering::Equal)
                }
            });
        let Some((minimum, basis, x)) = best else {
            debug!("No basic solution is nonnegative");
            return Ok(OptimizationResult::Infeasible);
        };

        // Extreme rays of the cone {d >= 0 : Ad = 0} are the basic feasible solutions of the
        // system with the additional normalization 1^T d = 1
        let mut ray_system = constraints.clone();
        ray_system.push_row(vec![F::one(); constraints.nr_columns()]);
        let mut ray_rhs = vec![F::zero(); constraints.nr_rows()];
        ray_rhs.push(F::one());
        if let Some(ray_rows) = ray_system.independent_rows(&ray_rhs, self.tolerance) {
            let ray_system = ray_system.select_rows(&ray_rows);
            let ray_rhs = ray_rows.iter().map(|&i| ray_rhs[i]).collect::<Vec<_>>();
            self.check_limit(ray_system.nr_columns(), ray_system.nr_rows())?;

            let improving = self.basic_feasible_solutions(&ray_system, &ray_rhs)
                .map(|(_, direction)| direction)
                .find(|direction| evaluate(direction) < -self.tolerance);
            if let Some(direction) = improving {
                debug!("Found an improving ray");
                return Ok(OptimizationResult::Unbounded(UnboundedRay::new(x, direction)));
            }
        }

        let objective_value = problem.reported_objective_value(minimum);
        Ok(OptimizationResult::FiniteOptimum(Solution::new(objective_value, x, basis, EnumMap::default())))
    }
}

/// Number of ways to choose `k` out of `n` items, saturating at `usize::MAX`.
fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);
    (0..k).try_fold(1_usize, |total, i| {
        // total * (n - i) is divisible by (i + 1)
        total.checked_mul(n - i).map(|product| product / (i + 1))
    }).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod test {
    use crate::algorithm::{OptimizationResult, SolveError, SolveLinearProgram, Status};
    use crate::algorithm::vertex_enumeration::{binomial, VertexEnumeration};
    use crate::data::linear_program::canonical_form::CanonicalForm;
    use crate::data::linear_program::elements::Direction;
    use crate::tests::{problem_1, problem_2, problem_3};

    #[test]
    fn choose() {
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(5, 3), 10);
        assert_eq!(binomial(2, 3), 0);
        assert_eq!(binomial(40, 20), 137_846_528_820);
        assert_eq!(binomial(10_000, 5_000), usize::MAX);
    }

    #[test]
    fn optimum() {
        let mut oracle = VertexEnumeration::new();

        let result = oracle.solve(&problem_1::canonical_form()).unwrap();
        assert_eq!(result.objective_value(), Some(-250f64));
        assert_eq!(result.solution().unwrap().values(), &[50f64, 100f64, 50f64, 0f64, 0f64]);

        let result = oracle.solve(&problem_2::canonical_form()).unwrap();
        assert!((result.objective_value().unwrap() - 1.75f64).abs() < 1e-12);

        let result = oracle.solve(&problem_3::canonical_form()).unwrap();
        assert!((result.objective_value().unwrap() + 8f64).abs() < 1e-12);
        assert_eq!(result.solution().unwrap().basis().len(), 2);
    }

    #[test]
    fn unbounded() {
        // min -x_0 s.t. x_0 - x_1 = 1
        let problem = CanonicalForm::new(
            vec![vec![1f64, -1f64]],
            vec![1f64],
            vec![-1f64, 0f64],
            Direction::Minimize,
        ).unwrap();

        match VertexEnumeration::new().solve(&problem) {
            Ok(OptimizationResult::Unbounded(ray)) => {
                assert_eq!(ray.point(), &[1f64, 0f64]);
                assert_eq!(ray.direction(), &[0.5f64, 0.5f64]);
            },
            _ => panic!("Problem is unbounded"),
        }

        // Bounded in the other direction
        let problem = CanonicalForm::new(
            vec![vec![1f64, -1f64]],
            vec![1f64],
            vec![-1f64, 0f64],
            Direction::Maximize,
        ).unwrap();
        let result = VertexEnumeration::new().solve(&problem).unwrap();
        assert_eq!(result.objective_value(), Some(-1f64));
    }

    #[test]
    fn infeasible() {
        let mut oracle = VertexEnumeration::new();

        // Inconsistent equations
        let problem = CanonicalForm::new(
            vec![vec![1f64, 1f64], vec![2f64, 2f64]],
            vec![1f64, 3f64],
            vec![1f64, 1f64],
            Direction::Minimize,
        ).unwrap();
        assert_eq!(oracle.solve(&problem), Ok(OptimizationResult::Infeasible));

        // Consistent, but not with nonnegative values
        let problem = CanonicalForm::new(
            vec![vec![1f64, 1f64]],
            vec![-1f64],
            vec![1f64, 1f64],
            Direction::Minimize,
        ).unwrap();
        assert_eq!(oracle.solve(&problem).map(|result| result.status()), Ok(Status::Infeasible));
    }

    #[test]
    fn limit() {
        let mut oracle = VertexEnumeration::new().with_max_bases(5);
        assert_eq!(
            oracle.solve(&problem_1::canonical_form()),
            Err(SolveError::EnumerationLimit { bases: 10 }),
        );
    }
}
