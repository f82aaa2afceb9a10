use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Base color of the selection band, a light red (`#f88`).
pub const DEFAULT_BAND_COLOR: Color = Color::rgb(1.0, 136.0 / 255.0, 136.0 / 255.0);

/// Overlay bootstrap configuration.
///
/// This type is serializable so host applications can persist/load overlay
/// setup without inventing their own ad-hoc format. The completion
/// callback is wired separately on [`RangeSelectionOverlay`] since it is
/// not data.
///
/// [`RangeSelectionOverlay`]: crate::api::RangeSelectionOverlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelectionConfig {
    /// Master on/off switch. While disabled, pointer events neither move
    /// the band nor change the cursor, and nothing is drawn.
    #[serde(default)]
    pub enabled: bool,
    /// Band base color; the stroke uses 90% and the fill 40% of its alpha.
    #[serde(default = "default_color")]
    pub color: Color,
    /// Initial value-space bounds. `None` defers to the default range
    /// resolver on first draw.
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

fn default_color() -> Color {
    DEFAULT_BAND_COLOR
}

impl Default for RangeSelectionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: DEFAULT_BAND_COLOR,
            start: None,
            end: None,
        }
    }
}

impl RangeSelectionConfig {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }
}
