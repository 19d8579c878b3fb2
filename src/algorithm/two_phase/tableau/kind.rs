//! # Tableau types: artificial or not
//!
//! A tableau can contain artificial variables. They are used to find a feasible solution in a
//! two-phase algorithm: the first phase finds a basic feasible solution, the second improves it.
//!
//! The `Tableau` type and the pivoting logic in the parent modules are independent of whether a
//! tableau contains artificial variables. This module enables that abstraction.

/// The tableau type provides two different ways for the `Tableau` to function, depending on whether
/// artificial variables are part of the problem.
///
/// Artificial variables always occupy the last columns of the tableau, right before the
/// right-hand side.
pub trait Kind {
    /// Number of artificial variables among the columns of the tableau.
    fn nr_artificial_variables(&self) -> usize;
}

/// The `Kind` of the tableau in the first phase: one artificial variable for each row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Artificial {
    nr_artificial_variables: usize,
}

impl Artificial {
    /// Describe a tableau with `nr_artificial_variables` trailing artificial columns.
    pub fn new(nr_artificial_variables: usize) -> Self {
        Self { nr_artificial_variables }
    }
}

impl Kind for Artificial {
    fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial_variables
    }
}

/// The `Kind` of the tableau in the second phase.
///
/// This `Tableau` variant should only be constructed with a known feasible basis.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub struct NonArtificial;

impl Kind for NonArtificial {
    fn nr_artificial_variables(&self) -> usize {
        0
    }
}
