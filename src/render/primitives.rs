use serde::{Deserialize, Serialize};

use crate::core::{PathOp, rounded_rect_path};
use crate::error::{OverlayError, OverlayResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb` or `#rrggbb` hex notation.
    pub fn from_hex(hex: &str) -> OverlayResult<Self> {
        let digits = hex.strip_prefix('#').ok_or_else(|| {
            OverlayError::InvalidData(format!("color `{hex}` must start with `#`"))
        })?;
        // Hex digits are ASCII; rejecting everything else up front keeps
        // the byte-indexed slicing below on char boundaries.
        if !digits.is_ascii() {
            return Err(OverlayError::InvalidData(format!(
                "color `{hex}` has a non-hex digit"
            )));
        }

        let channel = |value: u8, max: f64| f64::from(value) / max;
        match digits.len() {
            3 => {
                let mut parsed = [0u8; 3];
                for (slot, ch) in parsed.iter_mut().zip(digits.chars()) {
                    *slot = ch.to_digit(16).ok_or_else(|| {
                        OverlayError::InvalidData(format!("color `{hex}` has a non-hex digit"))
                    })? as u8;
                }
                Ok(Self::rgb(
                    channel(parsed[0], 15.0),
                    channel(parsed[1], 15.0),
                    channel(parsed[2], 15.0),
                ))
            }
            6 => {
                let mut parsed = [0u8; 3];
                for (slot, pair) in parsed.iter_mut().zip(0usize..3) {
                    let byte = &digits[pair * 2..pair * 2 + 2];
                    *slot = u8::from_str_radix(byte, 16).map_err(|_| {
                        OverlayError::InvalidData(format!("color `{hex}` has a non-hex digit"))
                    })?;
                }
                Ok(Self::rgb(
                    channel(parsed[0], 255.0),
                    channel(parsed[1], 255.0),
                    channel(parsed[2], 255.0),
                ))
            }
            _ => Err(OverlayError::InvalidData(format!(
                "color `{hex}` must be #rgb or #rrggbb"
            ))),
        }
    }

    /// Returns this color with its alpha channel multiplied by `factor`.
    #[must_use]
    pub fn with_alpha_scaled(self, factor: f64) -> Self {
        Self {
            alpha: (self.alpha * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn validate(self) -> OverlayResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(OverlayError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Draw command for the selection band in pixel space.
///
/// `x` may fall slightly outside the plot when the minimum-width floor
/// wins over the bounds clamp; backends draw it as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub line_join: LineJoin,
}

impl BandPrimitive {
    /// Path ops a backend traces to draw this band's silhouette.
    #[must_use]
    pub fn silhouette(self) -> Vec<PathOp> {
        rounded_rect_path(self.x, self.y, self.width, self.height, self.corner_radius)
    }

    pub fn validate(self) -> OverlayResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(OverlayError::InvalidData(
                "band geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(OverlayError::InvalidData(
                "band size must be non-negative".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(OverlayError::InvalidData(
                "band corner radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(OverlayError::InvalidData(
                "band stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()?;
        self.stroke.validate()
    }
}
