//! Flip sequencer
//!
//! Owns one pane's transition lifecycle: building the chip grid at
//! activation, issuing staggered visual-state changes through the
//! surface, and resolving the `show()`/`hide()` futures once the
//! visually-last event settles.
//!
//! # Timing
//!
//! One deterministic rule, applied to both directions: the content
//! fade is sequenced after the flip window, so
//!
//! ```text
//! show: |-- max_stagger + unit_duration --|-- content_duration --|
//! hide: |-- content_duration --|-- max_stagger + unit_duration --|
//! ```
//!
//! Every deferred step is derived from the grid's timing parameters;
//! nothing is a hardcoded constant.
//!
//! # Supersession
//!
//! A new `show()`/`hide()` immediately supersedes an in-flight
//! opposite transition: it bumps the operation epoch and re-issues
//! visual targets, and the stale operation's remaining timers resolve
//! without touching visual state. The settled state always matches the
//! most recent call.

use std::sync::Mutex;
use std::time::Duration;

use multiflip_grid::{Cell, GridSpec};
use slotmap::{new_key_type, SlotMap};

use crate::config::FlipConfig;
use crate::style;
use crate::surface::{ChipGeometry, ChipStyle, Surface};
use crate::FlipError;

new_key_type! {
    /// Handle to a chip registered with a sequencer
    pub struct ChipKey;
}

/// Transition state of one pane
///
/// Cycles `Hidden → Showing → Shown → Hiding → Hidden`. `Showing` and
/// `Hiding` are in-flight; a superseded transition leaves the state to
/// its successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Hidden,
    Showing,
    Shown,
    Hiding,
}

#[derive(Debug)]
struct ChipUnit<C> {
    cell: Cell,
    handle: C,
}

#[derive(Debug)]
struct SequencerInner<C> {
    state: AnimationState,
    /// Bumped by every accepted transition; stale timers compare
    /// against it before applying anything.
    epoch: u64,
    chips: SlotMap<ChipKey, ChipUnit<C>>,
}

/// Drives the flip-grid show/hide transition for one pane
///
/// Created by [`FlipSequencer::new`], which activates the widget:
/// measures the surface, partitions it, creates every chip in the
/// covering (flipped) state, and hides the content. Each instance owns
/// its grid and state exclusively.
#[derive(Debug)]
pub struct FlipSequencer<S: Surface> {
    surface: S,
    grid: GridSpec,
    config: FlipConfig,
    inner: Mutex<SequencerInner<S::Chip>>,
}

impl<S: Surface> FlipSequencer<S> {
    /// Activate a pane: build the grid and cover it with chips
    ///
    /// Fails with [`FlipError::Grid`] when the measured area or the
    /// configured partition counts cannot form a grid. On failure no
    /// chip has been created - the pane is untouched rather than
    /// half-built.
    pub fn new(surface: S, config: FlipConfig) -> Result<Self, FlipError> {
        let (width, height) = surface.measure();
        let grid = GridSpec::build(width, height, config.columns, config.rows)?;

        style::install_once(&surface);

        let chip_style = ChipStyle {
            background_color: config.background_color.clone(),
        };

        let mut chips = SlotMap::with_key();
        for cell in grid.cells() {
            let geometry = ChipGeometry {
                left: cell.left,
                top: cell.top,
                width: grid.cell_width(),
                height: grid.cell_height(),
            };
            let handle = surface.create_chip(geometry, &chip_style);
            surface.set_chip_flipped(&handle, true, Duration::ZERO, Duration::ZERO);
            chips.insert(ChipUnit { cell, handle });
        }
        surface.set_content_visible(false, Duration::ZERO);

        tracing::debug!(
            columns = grid.columns(),
            rows = grid.rows(),
            width,
            height,
            "flip pane activated"
        );

        Ok(Self {
            surface,
            grid,
            config,
            inner: Mutex::new(SequencerInner {
                state: AnimationState::Hidden,
                epoch: 0,
                chips,
            }),
        })
    }

    /// Flip the grid open and reveal the content
    ///
    /// Resolves once the whole effect has settled: the last-delayed
    /// chip's flip plus the content fade. Calling this on an already
    /// shown pane resolves immediately with no visual changes; calling
    /// it during an in-flight `hide()` supersedes that hide.
    pub async fn show(&self) {
        let epoch = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state == AnimationState::Shown {
                tracing::debug!("show on a shown pane, nothing to do");
                return;
            }

            inner.epoch += 1;
            inner.state = AnimationState::Showing;
            tracing::debug!(epoch = inner.epoch, "showing");

            for unit in inner.chips.values() {
                let delay = self.grid.stagger_delay(&unit.cell, self.config.unit_duration);
                self.surface.set_chip_flipped(
                    &unit.handle,
                    false,
                    self.config.unit_duration,
                    delay,
                );
            }
            inner.epoch
        };

        // Grid fully open once the last diagonal's flip settles
        tokio::time::sleep(self.flip_window()).await;
        {
            let inner = self.inner.lock().unwrap();
            if inner.epoch != epoch {
                tracing::debug!(epoch, current = inner.epoch, "show superseded");
                return;
            }
            self.surface
                .set_content_visible(true, self.config.content_duration);
        }

        tokio::time::sleep(self.config.content_duration).await;
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.epoch != epoch {
                tracing::debug!(epoch, current = inner.epoch, "show superseded");
                return;
            }
            inner.state = AnimationState::Shown;
        }
        tracing::debug!(epoch, "shown");
    }

    /// Fade the content out and flip the grid closed
    ///
    /// The time-reverse of [`show`](Self::show): content fades first,
    /// then chips re-flip in the same diagonal stagger order. No-op
    /// from `Hidden`; supersedes an in-flight `show()`.
    pub async fn hide(&self) {
        let epoch = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state == AnimationState::Hidden {
                tracing::debug!("hide on a hidden pane, nothing to do");
                return;
            }

            inner.epoch += 1;
            inner.state = AnimationState::Hiding;
            tracing::debug!(epoch = inner.epoch, "hiding");

            self.surface
                .set_content_visible(false, self.config.content_duration);
            inner.epoch
        };

        tokio::time::sleep(self.config.content_duration).await;
        {
            let inner = self.inner.lock().unwrap();
            if inner.epoch != epoch {
                tracing::debug!(epoch, current = inner.epoch, "hide superseded");
                return;
            }
            for unit in inner.chips.values() {
                let delay = self.grid.stagger_delay(&unit.cell, self.config.unit_duration);
                self.surface
                    .set_chip_flipped(&unit.handle, true, self.config.unit_duration, delay);
            }
        }

        tokio::time::sleep(self.flip_window()).await;
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.epoch != epoch {
                tracing::debug!(epoch, current = inner.epoch, "hide superseded");
                return;
            }
            inner.state = AnimationState::Hidden;
        }
        tracing::debug!(epoch, "hidden");
    }

    /// Current transition state
    pub fn state(&self) -> AnimationState {
        self.inner.lock().unwrap().state
    }

    /// The grid this pane was partitioned into
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Number of chips covering the pane
    pub fn chip_count(&self) -> usize {
        self.inner.lock().unwrap().chips.len()
    }

    /// The surface this sequencer drives
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Duration of the full flip sweep: last stagger delay plus one
    /// unit flip
    pub fn flip_window(&self) -> Duration {
        self.grid.max_stagger(self.config.unit_duration) + self.config.unit_duration
    }

    /// Total duration of an uninterrupted `show()`
    pub fn show_duration(&self) -> Duration {
        self.flip_window() + self.config.content_duration
    }

    /// Total duration of an uninterrupted `hide()`
    pub fn hide_duration(&self) -> Duration {
        self.config.content_duration + self.flip_window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedSurface {
        width: f32,
        height: f32,
    }

    impl Surface for FixedSurface {
        type Chip = u32;

        fn measure(&self) -> (f32, f32) {
            (self.width, self.height)
        }

        fn create_chip(&self, _geometry: ChipGeometry, _style: &ChipStyle) -> u32 {
            0
        }

        fn set_chip_flipped(&self, _chip: &u32, _flipped: bool, _dur: Duration, _delay: Duration) {}

        fn set_content_visible(&self, _visible: bool, _duration: Duration) {}
    }

    #[test]
    fn test_activation_builds_full_grid() {
        let surface = FixedSurface {
            width: 800.0,
            height: 400.0,
        };
        let pane = FlipSequencer::new(surface, FlipConfig::default()).unwrap();

        assert_eq!(pane.state(), AnimationState::Hidden);
        assert_eq!(pane.chip_count(), 16);
        assert_eq!(pane.grid().cell_width(), 200.0);
    }

    #[test]
    fn test_activation_rejects_zero_area() {
        let surface = FixedSurface {
            width: 0.0,
            height: 400.0,
        };
        let err = FlipSequencer::new(surface, FlipConfig::default()).unwrap_err();

        assert!(matches!(err, FlipError::Grid(_)));
    }

    #[test]
    fn test_durations_derive_from_grid_timing() {
        let surface = FixedSurface {
            width: 800.0,
            height: 400.0,
        };
        let pane = FlipSequencer::new(surface, FlipConfig::default()).unwrap();

        // 4x4 at 400ms: last diagonal starts at 300ms
        assert_eq!(pane.flip_window(), Duration::from_millis(700));
        assert_eq!(pane.show_duration(), Duration::from_millis(1100));
        assert_eq!(pane.hide_duration(), Duration::from_millis(1100));
    }

    #[test]
    fn test_single_cell_durations_have_no_stagger_spread() {
        let surface = FixedSurface {
            width: 100.0,
            height: 100.0,
        };
        let config = FlipConfig::default().partitions(1, 1);
        let pane = FlipSequencer::new(surface, config).unwrap();

        assert_eq!(pane.flip_window(), Duration::from_millis(400));
        assert_eq!(pane.show_duration(), Duration::from_millis(800));
    }
}
