use crate::error::{OverlayError, OverlayResult};

/// Pixel/value mapping for one horizontal axis, supplied by the host chart.
///
/// Implementations must be monotonic and order-preserving; the two methods
/// are treated as inverses of each other (not necessarily bit-exact).
/// The overlay never caches a transform: zoom or pan of the host chart may
/// change the mapping between frames, so it is queried fresh on every
/// event and every frame.
pub trait AxisTransform {
    fn value_to_pixel(&self, value: f64) -> f64;
    fn pixel_to_value(&self, pixel: f64) -> f64;
}

/// Reference linear axis mapping `[domain_start, domain_end]` onto
/// `[0, plot_width]` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAxis {
    domain_start: f64,
    domain_end: f64,
    plot_width: f64,
}

impl LinearAxis {
    pub fn new(domain_start: f64, domain_end: f64, plot_width: f64) -> OverlayResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(OverlayError::InvalidData(
                "axis domain must be finite and non-zero".to_owned(),
            ));
        }
        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(OverlayError::InvalidData(
                "axis plot width must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            plot_width,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }
}

impl AxisTransform for LinearAxis {
    fn value_to_pixel(&self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        (value - self.domain_start) / span * self.plot_width
    }

    fn pixel_to_value(&self, pixel: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        self.domain_start + pixel / self.plot_width * span
    }
}
