use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::selection::Handle;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayContext {
    pub viewport: Viewport,
    pub enabled: bool,
    pub dragging: bool,
    pub range_start: Option<f64>,
    pub range_end: Option<f64>,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OverlayEvent {
    /// A drag session opened. Always followed by exactly one `SessionEnded`.
    SessionStarted { handle: Handle },
    /// The matching session closed, via release or via disabling the overlay.
    SessionEnded,
    /// A drag completed and the range was committed.
    RangeCommitted { start: f64, end: f64 },
}

/// Hook interface for bounded custom logic around the overlay.
///
/// Observers can watch the session lifecycle and committed ranges without
/// mutating overlay internals directly.
pub trait OverlayObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: OverlayEvent, context: OverlayContext);
}
