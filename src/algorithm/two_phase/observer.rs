//! # Observing the simplex method
//!
//! The engine reports the start and end of each phase and every pivot to an `Observer`. Observers
//! receive read only views of the tableau and can't influence the algorithm.
use itertools::Itertools;
use log::{debug, trace};

use crate::algorithm::two_phase::Phase;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::OrderedField;

/// Read only view of a tableau at some moment during the solve.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a, F> {
    phase: Phase,
    step: usize,
    matrix: &'a DenseMatrix<F>,
    basis: &'a [usize],
}

impl<'a, F: OrderedField> Snapshot<'a, F> {
    pub(crate) fn new(phase: Phase, step: usize, matrix: &'a DenseMatrix<F>, basis: &'a [usize]) -> Self {
        debug_assert_eq!(matrix.nr_rows(), basis.len() + 1);

        Self { phase, step, matrix, basis }
    }

    /// Phase the tableau belongs to.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of pivots performed in this phase so far.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Row `i` of the tableau, including the right-hand side as last value.
    ///
    /// Row 0 holds the relative costs.
    pub fn row(&self, i: usize) -> &'a [F] {
        self.matrix.row(i)
    }

    /// All rows of the tableau, starting with the relative costs.
    pub fn rows(&self) -> impl Iterator<Item = &'a [F]> + 'a {
        self.matrix.rows().map(Vec::as_slice)
    }

    /// For each constraint row, the column that is basic in it.
    pub fn basis(&self) -> &'a [usize] {
        self.basis
    }

    /// Number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of columns, the right-hand side excluded.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns() - 1
    }

    /// Objective value of the current basic solution, as minimized in this phase.
    pub fn objective_function_value(&self) -> F {
        -self.matrix.get_value(0, self.nr_columns())
    }
}

/// A basis change.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Pivot {
    /// Column that entered the basis.
    pub entering: usize,
    /// Column that left the basis.
    pub leaving: usize,
    /// Constraint row that was pivoted on, starting at zero.
    pub row: usize,
}

/// Receives events from the simplex method.
///
/// All methods do nothing by default.
pub trait Observer<F> {
    /// A phase starts with the tableau in `snapshot`.
    fn phase_started(&mut self, _snapshot: &Snapshot<'_, F>) {}

    /// A pivot was performed, `snapshot` shows the tableau afterwards.
    fn pivoted(&mut self, _pivot: Pivot, _snapshot: &Snapshot<'_, F>) {}

    /// A phase ended with the tableau in `snapshot`.
    ///
    /// Not called when the phase is aborted because of an error.
    fn phase_finished(&mut self, _snapshot: &Snapshot<'_, F>) {}
}

impl<F> Observer<F> for () {}

impl<F, O> Observer<F> for &mut O
where
    O: Observer<F> + ?Sized,
{
    fn phase_started(&mut self, snapshot: &Snapshot<'_, F>) {
        (**self).phase_started(snapshot);
    }

    fn pivoted(&mut self, pivot: Pivot, snapshot: &Snapshot<'_, F>) {
        (**self).pivoted(pivot, snapshot);
    }

    fn phase_finished(&mut self, snapshot: &Snapshot<'_, F>) {
        (**self).phase_finished(snapshot);
    }
}

/// Writes a `log` record for every event.
///
/// Phase boundaries are logged at the debug level, pivots at the trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logger;

impl<F: OrderedField> Observer<F> for Logger {
    fn phase_started(&mut self, snapshot: &Snapshot<'_, F>) {
        debug!(
            "Phase {} started with {} rows and {} columns, basis [{}], objective {}",
            snapshot.phase(),
            snapshot.nr_rows(),
            snapshot.nr_columns(),
            snapshot.basis().iter().join(", "),
            snapshot.objective_function_value(),
        );
    }

    fn pivoted(&mut self, pivot: Pivot, snapshot: &Snapshot<'_, F>) {
        trace!(
            "Phase {} step {}: column {} entered in row {}, column {} left, objective {}",
            snapshot.phase(),
            snapshot.step(),
            pivot.entering,
            pivot.row,
            pivot.leaving,
            snapshot.objective_function_value(),
        );
    }

    fn phase_finished(&mut self, snapshot: &Snapshot<'_, F>) {
        debug!(
            "Phase {} finished after {} pivots, basis [{}], objective {}",
            snapshot.phase(),
            snapshot.step(),
            snapshot.basis().iter().join(", "),
            snapshot.objective_function_value(),
        );
    }
}

/// One recorded event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Event {
    /// Phase in which the event happened.
    pub phase: Phase,
    /// Pivots performed in that phase up to and including this event.
    pub step: usize,
    /// The basis change, absent for the start and end of a phase.
    pub pivot: Option<Pivot>,
    /// The basis after the event.
    pub basis: Vec<usize>,
}

/// Records the basis after every event, such that two runs can be compared.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Trajectory {
    events: Vec<Event>,
}

impl Trajectory {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in the order in which they happened.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Only the pivots of the given phase.
    pub fn pivots(&self, phase: Phase) -> impl Iterator<Item = Pivot> + '_ {
        self.events.iter()
            .filter(move |event| event.phase == phase)
            .filter_map(|event| event.pivot)
    }

    fn record<F: OrderedField>(&mut self, pivot: Option<Pivot>, snapshot: &Snapshot<'_, F>) {
        self.events.push(Event {
            phase: snapshot.phase(),
            step: snapshot.step(),
            pivot,
            basis: snapshot.basis().to_vec(),
        });
    }
}

impl<F: OrderedField> Observer<F> for Trajectory {
    fn phase_started(&mut self, snapshot: &Snapshot<'_, F>) {
        self.record(None, snapshot);
    }

    fn pivoted(&mut self, pivot: Pivot, snapshot: &Snapshot<'_, F>) {
        self.record(Some(pivot), snapshot);
    }

    fn phase_finished(&mut self, snapshot: &Snapshot<'_, F>) {
        self.record(None, snapshot);
    }
}
