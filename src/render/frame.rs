use crate::core::Viewport;
use crate::error::{OverlayError, OverlayResult};
use crate::render::BandPrimitive;

/// Backend-agnostic scene for one overlay draw pass.
///
/// An empty frame (no band) still means "clear the overlay surface":
/// the overlay is disabled or has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub viewport: Viewport,
    pub band: Option<BandPrimitive>,
}

impl OverlayFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            band: None,
        }
    }

    #[must_use]
    pub fn with_band(mut self, band: BandPrimitive) -> Self {
        self.band = Some(band);
        self
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if !self.viewport.is_valid() {
            return Err(OverlayError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        if let Some(band) = self.band {
            band.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.band.is_none()
    }
}
