//! # Fixtures for tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn canonical_form()`
//! * `fn artificial_tableau_form()`
//! * `fn final_artificial_tableau_form()`
//! * `fn tableau_form()`
use crate::algorithm::two_phase::{Context, Phase, SolverOptions};
use crate::algorithm::two_phase::phase_one::{self, RankedFeasibilityResult};
use crate::algorithm::two_phase::phase_two::tableau_from_artificial;
use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use crate::algorithm::two_phase::tableau::kind::NonArtificial;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::canonical_form::CanonicalForm;


/// Run the first phase on a feasible problem and derive the tableau of the second phase.
pub fn phase_two_tableau(problem: &CanonicalForm<f64>) -> Tableau<f64, NonArtificial> {
    let options = SolverOptions::default();
    let mut observer = ();
    let mut context = Context::new(Phase::One, &options, &mut observer);
    match phase_one::primal::<_, FirstProfitable, _>(phase_one::artificial_tableau(problem), &mut context) {
        Ok(RankedFeasibilityResult::Feasible { rank, tableau }) => tableau_from_artificial(tableau, &rank, problem),
        _ => panic!("Problem should be feasible"),
    }
}
