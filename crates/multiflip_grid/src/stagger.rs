//! Diagonal stagger timing
//!
//! The one piece of real math in the system: a diagonal wavefront.
//! A cell's start delay grows with its anti-diagonal index
//! (`column + row`), so cells on the same anti-diagonal flip in
//! lockstep and the effect sweeps from the top-left corner.

use std::time::Duration;

use crate::grid::Cell;

/// Inter-diagonal delay increment
///
/// `unit_duration / (columns + rows)`. The divisor is never zero for a
/// valid grid, but the function saturates to zero anyway rather than
/// panicking on a degenerate call.
pub fn diff_duration(unit_duration: Duration, columns: u32, rows: u32) -> Duration {
    let groups = columns + rows;
    if groups == 0 {
        return Duration::ZERO;
    }
    unit_duration / groups
}

/// Start delay for one cell's flip
///
/// `unit_duration * (column + row) / (columns + rows)`. The multiply
/// happens before the divide so the result is exact for the common
/// millisecond durations.
pub fn stagger_delay(cell: &Cell, unit_duration: Duration, columns: u32, rows: u32) -> Duration {
    let groups = columns + rows;
    if groups == 0 {
        return Duration::ZERO;
    }
    unit_duration * cell.diagonal_index() / groups
}
