//! Surface capability
//!
//! The sequencer never touches a rendering tree directly; it drives
//! visual state through this trait, implemented by the surrounding
//! host layer (a DOM adapter, a retained-mode UI node, a test fake).

use std::time::Duration;

/// Position and size of one chip within the container, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipGeometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Visual styling applied to every chip of a pane
#[derive(Clone, Debug, PartialEq)]
pub struct ChipStyle {
    /// Background color, e.g. `"#393F44"`; opaque to the sequencer
    pub background_color: String,
}

/// Capability for applying visual state to one target container
///
/// Chips are created in the sequencer's enumeration order; a surface
/// that prepends each new chip (the host markup convention) therefore
/// reverses paint order, which is fine because chips never overlap.
///
/// Transition semantics the sequencer relies on:
///
/// - `set_chip_flipped` with a delay schedules the visual change
///   inside the surface; a later call on the same chip supersedes any
///   earlier pending delayed transition
/// - a zero duration applies the state immediately, with no transition
pub trait Surface {
    /// Handle to one created chip
    type Chip;

    /// Current rendered size of the container, in pixels
    fn measure(&self) -> (f32, f32);

    /// Create one chip at the given position with the given style
    fn create_chip(&self, geometry: ChipGeometry, style: &ChipStyle) -> Self::Chip;

    /// Apply or remove the 3D flip state on a chip
    ///
    /// The visual transition runs for `duration` starting after
    /// `delay`.
    fn set_chip_flipped(&self, chip: &Self::Chip, flipped: bool, duration: Duration, delay: Duration);

    /// Fade the container's non-chip content in or out over `duration`
    fn set_content_visible(&self, visible: bool, duration: Duration);

    /// Install the pane's shared visual styles
    ///
    /// Called at most once per process via [`crate::style::install_once`].
    fn install_styles(&self) {}
}
