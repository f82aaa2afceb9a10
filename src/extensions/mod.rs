//! Observer hooks for host applications.
//!
//! Session start/end notifications are guaranteed to arrive in pairs, so a
//! host can scope side effects (e.g. suppressing native text selection
//! while a drag is in flight) to exactly one gesture without save/restore
//! bookkeeping.

mod observers;

pub use observers::{OverlayContext, OverlayEvent, OverlayObserver};
