pub mod constraint;
pub mod default_range;
pub mod range;

pub use constraint::{
    Handle, InteractionSession, MIN_SELECTION_WIDTH_PX, PixelInterval, constrain_interval,
};
pub use default_range::resolve_default_range;
pub use range::{CommittedRange, SelectionRange};
