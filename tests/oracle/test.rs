use proptest::prelude::*;

use tableau_simplex::algorithm::{OptimizationResult, SolveLinearProgram};
use tableau_simplex::algorithm::two_phase::strategy::pivot_rule::SteepestDescentAlongVariable;
use tableau_simplex::algorithm::two_phase::TwoPhase;
use tableau_simplex::algorithm::vertex_enumeration::VertexEnumeration;

use super::problems;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// The simplex method and enumeration agree on the status and on the optimal value
    #[test]
    fn agrees_with_enumeration(problem in problems()) {
        let simplex = problem.solve();
        let oracle = VertexEnumeration::new().solve(&problem);
        prop_assert!(simplex.is_ok(), "simplex failed: {:?}", simplex);
        prop_assert!(oracle.is_ok(), "oracle failed: {:?}", oracle);
        let (simplex, oracle) = (simplex.unwrap(), oracle.unwrap());

        prop_assert_eq!(simplex.status(), oracle.status());
        if let (Some(found), Some(expected)) = (simplex.objective_value(), oracle.objective_value()) {
            prop_assert!((found - expected).abs() < 1e-6, "{} != {}", found, expected);
        }
    }

    /// The choice of pivot rule doesn't change the status or the optimal value
    #[test]
    fn pivot_rules_agree(problem in problems()) {
        let first = problem.solve();
        let steepest = TwoPhase::<f64>::new()
            .with_pivot_rule::<SteepestDescentAlongVariable>()
            .solve(&problem);

        // The steepest descent rule may cycle, there is nothing to compare then
        if let (Ok(first), Ok(steepest)) = (first, steepest) {
            prop_assert_eq!(first.status(), steepest.status());
            if let (OptimizationResult::FiniteOptimum(first), OptimizationResult::FiniteOptimum(steepest)) = (&first, &steepest) {
                prop_assert!((first.objective_value() - steepest.objective_value()).abs() < 1e-6);
            }
        }
    }
}
