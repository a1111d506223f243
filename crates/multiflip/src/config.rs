//! Transition configuration
//!
//! Recognized options with their defaults, plus an `AttributeSource`
//! reader so a host layer can feed options from markup attributes.

use std::str::FromStr;
use std::time::Duration;

/// Default horizontal partition count
pub const DEFAULT_COLUMNS: u32 = 4;
/// Default vertical partition count
pub const DEFAULT_ROWS: u32 = 4;
/// Default duration of one chip's individual flip
pub const DEFAULT_UNIT_DURATION: Duration = Duration::from_millis(400);
/// Default chip background color
pub const DEFAULT_BGCOLOR: &str = "#393F44";

/// Reader for widget options supplied by the host layer
///
/// Typically backed by element attributes. Returns `None` for unset
/// options; unparsable values also fall back to defaults.
pub trait AttributeSource {
    fn attr(&self, name: &str) -> Option<String>;
}

/// Configuration for one flip pane
///
/// `content_duration` defaults to `unit_duration` when not set
/// explicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipConfig {
    /// Horizontal partition count (m)
    pub columns: u32,
    /// Vertical partition count (n)
    pub rows: u32,
    /// Duration of one chip's flip
    pub unit_duration: Duration,
    /// Duration of the content fade
    pub content_duration: Duration,
    /// Chip background color, passed through to the surface untouched
    pub background_color: String,
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            unit_duration: DEFAULT_UNIT_DURATION,
            content_duration: DEFAULT_UNIT_DURATION,
            background_color: DEFAULT_BGCOLOR.to_string(),
        }
    }
}

impl FlipConfig {
    /// Read configuration from a host attribute source
    ///
    /// Recognized attributes: `columns`, `rows`, `unit-dur` (ms),
    /// `content-dur` (ms), `bgcolor`. Missing, unparsable, or zero
    /// numeric values fall back to the defaults (zero is treated as
    /// unset, matching the host markup convention).
    pub fn from_attrs(source: &impl AttributeSource) -> Self {
        let columns = parse_attr(source, "columns")
            .filter(|v: &u32| *v != 0)
            .unwrap_or(DEFAULT_COLUMNS);
        let rows = parse_attr(source, "rows")
            .filter(|v: &u32| *v != 0)
            .unwrap_or(DEFAULT_ROWS);

        let unit_duration = parse_attr::<u64>(source, "unit-dur")
            .filter(|ms| *ms != 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_UNIT_DURATION);

        let content_duration = parse_attr::<u64>(source, "content-dur")
            .filter(|ms| *ms != 0)
            .map(Duration::from_millis)
            .unwrap_or(unit_duration);

        let background_color = source
            .attr("bgcolor")
            .unwrap_or_else(|| DEFAULT_BGCOLOR.to_string());

        Self {
            columns,
            rows,
            unit_duration,
            content_duration,
            background_color,
        }
    }

    /// Set both partition counts
    pub fn partitions(mut self, columns: u32, rows: u32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Set the duration of one chip's flip
    ///
    /// Also the default for the content fade unless overridden.
    pub fn unit_duration(mut self, duration: Duration) -> Self {
        self.unit_duration = duration;
        self
    }

    /// Set the content fade duration independently of the flip
    pub fn content_duration(mut self, duration: Duration) -> Self {
        self.content_duration = duration;
        self
    }

    /// Set the chip background color
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }
}

fn parse_attr<T: FromStr>(source: &impl AttributeSource, name: &str) -> Option<T> {
    let raw = source.attr(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(attr = name, value = %raw, "unparsable attribute, using default");
            None
        }
    }
}
