pub mod axis;
pub mod geometry;
pub mod types;

pub use axis::{AxisTransform, LinearAxis};
pub use geometry::{PathOp, clamp, rounded_rect_path};
pub use types::{DataPoint, Viewport};
