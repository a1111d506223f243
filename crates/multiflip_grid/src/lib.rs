//! Multiflip grid partitioner
//!
//! Pure geometry and timing for the multiflip transition effect:
//!
//! - **Grid Partitioning**: splits a rectangular area into an m×n grid
//!   of equally sized cells
//! - **Diagonal Stagger**: derives each cell's animation start delay
//!   from its anti-diagonal index, producing a corner-to-corner sweep
//!
//! No side effects and no dependency on any rendering or widget layer;
//! the sequencer crate consumes this for its timing schedule.

pub mod grid;
pub mod stagger;

pub use grid::{Cell, GridError, GridSpec};
pub use stagger::{diff_duration, stagger_delay};
