//! Values reported by the annealing loop.

use crate::geometry::Point;

/// Notification sent to an observer each time a candidate is accepted.
///
/// `frame` counts accepted moves (1 for the first acceptance), which makes
/// it a stable identifier for progressive snapshots of the tour.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a, const D: usize> {
    /// Number of accepted moves so far, including this one.
    pub frame: usize,

    /// Zero-based iteration at which the move was accepted.
    pub iteration: usize,

    /// Temperature the move was judged at.
    pub temperature: f64,

    /// Cost change of the accepted move.
    pub delta: f64,

    /// Cost of the newly accepted path.
    pub cost: f64,

    /// The newly accepted path.
    pub path: &'a [Point<D>],
}

impl<const D: usize> Transition<'_, D> {
    /// `true` if the move strictly lowered the cost.
    pub fn improved(&self) -> bool {
        self.delta < 0.0
    }
}
