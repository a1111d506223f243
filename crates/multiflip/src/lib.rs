//! Multiflip transition sequencer
//!
//! Drives the "flip grid" show/hide effect: a pane is covered by an
//! m×n grid of chips that flip open in a diagonal wave, then the
//! pane's real content fades in. Hiding runs the same choreography in
//! reverse.
//!
//! # Pieces
//!
//! - **FlipSequencer**: owns the transition lifecycle - awaitable
//!   `show()`/`hide()` with deterministic total duration, diagonal
//!   stagger scheduling, and supersession of in-flight transitions
//! - **Surface**: capability trait the host layer implements to apply
//!   visual state (chip transforms, content opacity)
//! - **FlipConfig**: recognized options with defaults, readable from a
//!   host attribute source
//!
//! Grid geometry and stagger math live in the `multiflip_grid` crate.
//!
//! # Example
//!
//! ```ignore
//! let config = FlipConfig::default().partitions(8, 4);
//! let pane = FlipSequencer::new(surface, config)?;
//!
//! pane.show().await; // resolves once the last chip settles and content is visible
//! pane.hide().await;
//! ```

pub mod config;
pub mod sequencer;
pub mod style;
pub mod surface;

pub use config::{AttributeSource, FlipConfig};
pub use sequencer::{AnimationState, ChipKey, FlipSequencer};
pub use surface::{ChipGeometry, ChipStyle, Surface};

use thiserror::Error;

/// Errors surfaced at widget activation
///
/// All failures are setup-time: once a sequencer exists, transitions
/// cannot fail (superseded transitions resolve silently).
#[derive(Debug, Error)]
pub enum FlipError {
    /// The container area or partition counts cannot form a grid
    #[error(transparent)]
    Grid(#[from] multiflip_grid::GridError),
}
