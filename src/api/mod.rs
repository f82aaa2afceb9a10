mod config;
mod overlay;

pub use config::{DEFAULT_BAND_COLOR, RangeSelectionConfig};
pub use overlay::{
    BAND_CORNER_RADIUS_PX, BAND_FILL_ALPHA, BAND_STROKE_ALPHA, BAND_STROKE_WIDTH_PX,
    RangeSelectionOverlay,
};
