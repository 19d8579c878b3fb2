//! # Small problems with known answers
use approx::assert_abs_diff_eq;

use tableau_simplex::algorithm::{OptimizationResult, SolveError, SolveLinearProgram, Status};
use tableau_simplex::algorithm::two_phase::{Phase, SolverOptions, TwoPhase};
use tableau_simplex::algorithm::two_phase::observer::{Logger, Trajectory};
use tableau_simplex::data::linear_program::canonical_form::CanonicalForm;
use tableau_simplex::data::linear_program::elements::Direction;
use tableau_simplex::data::linear_program::error::{DimensionError, ProblemError};

fn production_planning(direction: Direction) -> CanonicalForm<f64> {
    CanonicalForm::new(
        vec![
            vec![1f64, 0f64, 1f64, 0f64, 0f64],
            vec![0f64, 2f64, 0f64, 1f64, 0f64],
            vec![1f64, 1f64, 0f64, 0f64, 1f64],
        ],
        vec![100f64, 200f64, 150f64],
        vec![-1f64, -2f64, 0f64, 0f64, 0f64],
        direction,
    ).unwrap()
}

#[test]
fn production_planning_minimum() {
    let result = production_planning(Direction::Minimize).solve().unwrap();

    assert_eq!(result.status(), Status::Optimal);
    let solution = result.solution().unwrap();
    assert_eq!(solution.objective_value(), -250f64);
    assert_eq!(solution.values(), &[50f64, 100f64, 50f64, 0f64, 0f64]);
}

#[test]
fn production_planning_logged() {
    let mut engine = TwoPhase::<f64>::new().with_observer(Logger);
    let result = engine.solve(&production_planning(Direction::Minimize)).unwrap();
    assert_eq!(result.objective_value(), Some(-250f64));
}

#[test]
fn mixed_signs() {
    let problem = CanonicalForm::from_target(
        vec![
            vec![1f64, 3f64, 0f64, 4f64, 1f64],
            vec![1f64, 2f64, 0f64, -3f64, 1f64],
            vec![-1f64, -4f64, 3f64, 0f64, 0f64],
        ],
        vec![2f64, 2f64, 1f64],
        vec![2f64, 3f64, 3f64, 1f64, -2f64],
        "Minimize",
    ).unwrap();

    let result = problem.solve().unwrap();
    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective_value().unwrap(), -3f64, epsilon = 1e-9);

    let problem = CanonicalForm::from_target(
        problem.constraints().rows().cloned().collect(),
        problem.b().to_vec(),
        problem.cost(),
        "MAX",
    ).unwrap();
    assert_abs_diff_eq!(problem.solve().unwrap().objective_value().unwrap(), 7f64, epsilon = 1e-9);
}

#[test]
fn unbounded_ray() {
    // The second variable can grow without limit, increasing the objective
    let problem = CanonicalForm::new(
        vec![vec![1f64, -1f64, 0f64], vec![0f64, 0f64, 1f64]],
        vec![2f64, 1f64],
        vec![0f64, 1f64, 1f64],
        Direction::Maximize,
    ).unwrap();

    match problem.solve() {
        Ok(OptimizationResult::Unbounded(ray)) => {
            for step in [0f64, 1f64, 100f64] {
                let x = ray.at(step);
                assert!(problem.constraint_violation(&x) < 1e-9);
                assert!(x.iter().all(|&value| value >= 0f64));
            }
            assert!(problem.objective_value(&ray.at(100f64)) > problem.objective_value(ray.point()));
        },
        _ => panic!("Problem is unbounded"),
    }
}

#[test]
fn infeasible() {
    let problem = CanonicalForm::new(
        vec![vec![1f64, 1f64]],
        vec![-1f64],
        vec![0f64, 0f64],
        Direction::Minimize,
    ).unwrap();
    assert_eq!(problem.solve(), Ok(OptimizationResult::Infeasible));
}

#[test]
fn iteration_limit() {
    let options = SolverOptions::default().with_max_iterations(1);
    let result = TwoPhase::<f64>::new()
        .with_options(options)
        .solve(&production_planning(Direction::Minimize));

    match result {
        Err(error @ SolveError::IterationLimit { phase: Phase::One, iterations: 1 }) => {
            assert_eq!(error.to_string(), "reached the limit of 1 pivots in phase 1");
        },
        _ => panic!("Should have run out of pivots"),
    }
}

#[test]
fn trajectory() {
    let mut engine = TwoPhase::<f64>::new().with_observer(Trajectory::new());
    engine.solve(&production_planning(Direction::Maximize)).unwrap();
    let trajectory = engine.into_observer();

    assert_eq!(trajectory.pivots(Phase::One).count(), 3);
    assert_eq!(trajectory.pivots(Phase::Two).count(), 3);
    let last = trajectory.events().last().unwrap();
    assert_eq!(last.phase, Phase::Two);
    assert_eq!(last.basis, vec![2, 3, 4]);
}

#[test]
fn invalid_input() {
    let result = CanonicalForm::new(vec![vec![1f64, 1f64], vec![1f64]], vec![1f64, 1f64], vec![0f64, 0f64], Direction::Minimize);
    assert_eq!(result, Err(DimensionError::RaggedRow { row: 1, length: 1, expected: 2 }));

    let result = CanonicalForm::<f64>::new(vec![], vec![], vec![], Direction::Minimize);
    assert!(matches!(result, Err(DimensionError::Empty { .. })));

    let result = CanonicalForm::from_target(vec![vec![1f64]], vec![1f64], vec![1f64], "optimize");
    match result {
        Err(ProblemError::InvalidDirection(error)) => assert_eq!(error.given(), "optimize"),
        _ => panic!("Direction is invalid"),
    }
}
