use serde::{Deserialize, Serialize};

use crate::selection::{Handle, InteractionSession, PixelInterval};

/// Pixel distance within which a pointer grabs a resize handle.
pub const HANDLE_TOLERANCE_PX: f64 = 5.0;

/// Cursor feedback the host should apply to the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorIcon {
    Default,
    /// West-resize cursor over the left handle.
    ResizeStart,
    /// East-resize cursor over the right handle.
    ResizeEnd,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Pointer-interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Hovering(CursorIcon),
    Dragging(InteractionSession),
}

/// Owns the drag session lifecycle and the two hit tests.
///
/// The hover test (strict `<` tolerance, edge guards) and the press test
/// (inclusive `<=` tolerance, permissive fallback) are deliberately
/// different: a pointer exactly at the tolerance boundary hovers as
/// default cursor but still opens a resize session on press, and a press
/// that matches neither handle always falls through to a move session
/// regardless of whether the pointer sits inside the band.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionController {
    state: ControllerState,
}

impl InteractionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<&InteractionSession> {
        match &self.state {
            ControllerState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self.state, ControllerState::Dragging(_))
    }

    /// Hover hit test used outside an active session; drives cursor
    /// feedback only.
    #[must_use]
    pub fn hover_cursor(x: f64, interval: PixelInterval, plot_width: f64) -> CursorIcon {
        let PixelInterval { left, right } = interval;
        if (left - x).abs() < HANDLE_TOLERANCE_PX && left >= 0.0 {
            CursorIcon::ResizeStart
        } else if (right - x).abs() < HANDLE_TOLERANCE_PX && right <= plot_width {
            CursorIcon::ResizeEnd
        } else if x > left && x < right {
            CursorIcon::Move
        } else {
            CursorIcon::Default
        }
    }

    /// Press hit test: inclusive tolerance, and any unmatched position is
    /// classified as a move of the whole band.
    #[must_use]
    pub fn classify_press(x: f64, interval: PixelInterval) -> Handle {
        let PixelInterval { left, right } = interval;
        if (left - x).abs() <= HANDLE_TOLERANCE_PX {
            Handle::Start
        } else if (right - x).abs() <= HANDLE_TOLERANCE_PX {
            Handle::End
        } else {
            Handle::Move
        }
    }

    #[must_use]
    pub fn cursor_for_handle(handle: Handle) -> CursorIcon {
        match handle {
            Handle::Start => CursorIcon::ResizeStart,
            Handle::End => CursorIcon::ResizeEnd,
            Handle::Move => CursorIcon::Move,
        }
    }

    /// Records a hover hint without opening a session.
    pub fn set_hover(&mut self, cursor: CursorIcon) {
        if !self.is_dragging() {
            self.state = ControllerState::Hovering(cursor);
        }
    }

    /// Opens a drag session for `handle`.
    ///
    /// For `Handle::Move` the anchor is the band's effective center at
    /// drag start; for the resize handles it is the pressed position and
    /// never consulted.
    pub fn begin_session(&mut self, handle: Handle, interval: PixelInterval, pressed_pixel: f64) {
        let anchor_pixel = match handle {
            Handle::Move => interval.right - interval.width() / 2.0,
            Handle::Start | Handle::End => pressed_pixel,
        };
        self.state = ControllerState::Dragging(InteractionSession::new(
            handle,
            anchor_pixel,
            pressed_pixel,
        ));
    }

    /// Updates the live proposal; returns `false` when no session is open.
    pub fn update_proposal(&mut self, proposed_pixel: f64) -> bool {
        match &mut self.state {
            ControllerState::Dragging(session) => {
                session.proposed_pixel = proposed_pixel;
                true
            }
            _ => false,
        }
    }

    /// Closes the active session and returns it, resetting to `Idle`.
    pub fn end_session(&mut self) -> Option<InteractionSession> {
        match self.state {
            ControllerState::Dragging(session) => {
                self.state = ControllerState::Idle;
                Some(session)
            }
            _ => {
                self.state = ControllerState::Idle;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = ControllerState::Idle;
    }
}
