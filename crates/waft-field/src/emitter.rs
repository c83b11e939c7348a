//! Scent emitters derived from a grid layout.

use waft_core::{CellKind, GridLayout, GridPos};

/// A grid cell that radiates scent with a fixed strength and sign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emitter {
    /// The emitting cell.
    pub pos: GridPos,
    /// Signed emission strength: +1.0 for goals, -1.0 for pits.
    pub strength: f64,
}

/// The emission strength for a cell kind, or `None` for non-emitting kinds.
pub fn strength_for(kind: CellKind) -> Option<f64> {
    match kind {
        CellKind::Goal => Some(1.0),
        CellKind::Pit => Some(-1.0),
        CellKind::Empty | CellKind::Wall => None,
    }
}

/// Derive the emitter set from a layout, in row-major cell order.
///
/// The set is fixed for the lifetime of a [`SignalField`](crate::SignalField)
/// built from the same layout; deriving twice from one layout yields the
/// same emitters in the same order.
pub fn derive(layout: &GridLayout) -> Vec<Emitter> {
    layout
        .iter()
        .filter_map(|(pos, kind)| strength_for(kind).map(|strength| Emitter { pos, strength }))
        .collect()
}
