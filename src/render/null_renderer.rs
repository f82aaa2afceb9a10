use crate::error::OverlayResult;
use crate::render::{BandPrimitive, OverlayFrame, Renderer};

/// No-op renderer used by tests and headless overlay usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_band: Option<BandPrimitive>,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &OverlayFrame) -> OverlayResult<()> {
        frame.validate()?;
        self.last_band = frame.band;
        self.render_count += 1;
        Ok(())
    }
}
