//! # Properties of every result
//!
//! Optimal solutions are feasible and achieve the reported value, unbounded rays are improving
//! directions, and solving is deterministic.
use proptest::prelude::*;

use tableau_simplex::algorithm::{OptimizationResult, SolveLinearProgram};
use tableau_simplex::algorithm::two_phase::observer::Trajectory;
use tableau_simplex::algorithm::two_phase::TwoPhase;
use tableau_simplex::data::linear_program::elements::Direction;

use crate::oracle::{mirrored, problems};

const EPSILON: f64 = 1e-6;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn optimal_solutions_are_feasible(problem in problems()) {
        if let Ok(OptimizationResult::FiniteOptimum(solution)) = problem.solve() {
            let x = solution.values();
            prop_assert_eq!(x.len(), problem.nr_variables());
            prop_assert!(problem.constraint_violation(x) < EPSILON);
            prop_assert!(x.iter().all(|&value| value >= -EPSILON));
            prop_assert!((problem.objective_value(x) - solution.objective_value()).abs() < EPSILON);
            prop_assert!(solution.basis().len() <= problem.nr_constraints());
        }
    }

    #[test]
    fn rays_improve_without_limit(problem in problems()) {
        if let Ok(OptimizationResult::Unbounded(ray)) = problem.solve() {
            let point = ray.point();
            prop_assert!(problem.constraint_violation(point) < EPSILON);
            prop_assert!(point.iter().all(|&value| value >= -EPSILON));

            let direction = ray.direction();
            prop_assert!(direction.iter().all(|&value| value >= -EPSILON));
            let null = problem.constraints().mul_vector(direction);
            prop_assert!(null.iter().all(|value| value.abs() < EPSILON));

            let change = problem.objective_value(direction);
            match problem.direction() {
                Direction::Minimize => prop_assert!(change < -EPSILON),
                Direction::Maximize => prop_assert!(change > EPSILON),
            }
        }
    }

    /// Maximizing c is minimizing -c
    #[test]
    fn mirrored_problem(problem in problems()) {
        let result = problem.solve();
        let other = mirrored(&problem).solve();
        match (result, other) {
            (Ok(OptimizationResult::FiniteOptimum(first)), Ok(OptimizationResult::FiniteOptimum(second))) => {
                prop_assert_eq!(first.objective_value(), -second.objective_value());
                prop_assert_eq!(first.values(), second.values());
            },
            (Ok(first), Ok(second)) => prop_assert_eq!(first.status(), second.status()),
            (first, second) => prop_assert_eq!(first.is_err(), second.is_err()),
        }
    }

    #[test]
    fn deterministic(problem in problems()) {
        let mut first = TwoPhase::<f64>::new().with_observer(Trajectory::new());
        let mut second = TwoPhase::<f64>::new().with_observer(Trajectory::new());

        prop_assert_eq!(first.solve(&problem), second.solve(&problem));
        prop_assert_eq!(first.into_observer(), second.into_observer());
    }
}
