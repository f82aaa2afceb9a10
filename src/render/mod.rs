mod frame;
mod null_renderer;
mod primitives;

pub use frame::OverlayFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{BandPrimitive, Color, LineJoin};

use crate::error::OverlayResult;

/// Contract implemented by any rendering backend.
///
/// A frame is a complete scene: backends clear the overlay surface before
/// painting it, whether or not a drag is in progress. Backends receive a
/// fully materialized `OverlayFrame` so drawing code remains isolated from
/// selection and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &OverlayFrame) -> OverlayResult<()>;
}
