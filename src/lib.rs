//! rangeband-rs: interactive range-selection overlay for chart axes.
//!
//! This crate provides the interaction state machine, geometric constraint
//! logic, and backend-agnostic rendering for a draggable horizontal
//! selection band over a data-bearing axis. The host chart supplies the
//! axis mapping, pointer events, and a drawing backend.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod selection;
pub mod telemetry;

pub use api::{RangeSelectionConfig, RangeSelectionOverlay};
pub use error::{OverlayError, OverlayResult};
pub use selection::CommittedRange;
