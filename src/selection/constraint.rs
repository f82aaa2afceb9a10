use serde::{Deserialize, Serialize};

/// Minimum allowed pixel width of the selection band.
pub const MIN_SELECTION_WIDTH_PX: f64 = 10.0;

/// Which part of the band a drag gesture manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handle {
    Start,
    End,
    Move,
}

/// Derived pixel-space interval, always recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelInterval {
    pub left: f64,
    pub right: f64,
}

impl PixelInterval {
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }
}

/// Mutable record of one in-progress drag gesture.
///
/// Created on pointer-down after hit classification, destroyed on
/// pointer-release. At most one session exists at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSession {
    pub handle: Handle,
    /// Pixel position of the band's effective center at drag start.
    /// Consulted only when `handle == Handle::Move`.
    pub anchor_pixel: f64,
    /// Latest pointer pixel position; consumed at render and commit time.
    pub proposed_pixel: f64,
}

impl InteractionSession {
    #[must_use]
    pub fn new(handle: Handle, anchor_pixel: f64, proposed_pixel: f64) -> Self {
        Self {
            handle,
            anchor_pixel,
            proposed_pixel,
        }
    }

    /// Applies the constraint function using this session's live proposal.
    #[must_use]
    pub fn constrained(self, current: PixelInterval, plot_width: f64) -> PixelInterval {
        constrain_interval(
            current,
            self.handle,
            self.anchor_pixel,
            self.proposed_pixel,
            plot_width,
        )
    }
}

/// Maps a proposed pointer position plus the current interval into a new
/// pixel interval under the band's geometric constraints.
///
/// This function is pure and is evaluated identically by the live-redraw
/// path and the commit path, so the band a user sees on the last move
/// event is exactly the band that gets committed on release.
///
/// `proposed_pixel` is expected to be pre-clamped to `[0, plot_width]`.
/// Resizing clamps are applied in a fixed order: the bounds clamp first,
/// then the minimum-width floor. When the opposite bound sits closer than
/// the minimum width to the plot edge, the floor wins and can place the
/// moved bound slightly outside the plot. That matches the band's
/// observable behavior and keeps the width invariant intact.
#[must_use]
pub fn constrain_interval(
    current: PixelInterval,
    handle: Handle,
    anchor_pixel: f64,
    proposed_pixel: f64,
    plot_width: f64,
) -> PixelInterval {
    let mut left = current.left;
    let mut right = current.right;

    match handle {
        Handle::Start => {
            left = proposed_pixel;
            if proposed_pixel < 0.0 {
                left = 0.0;
            }
            if proposed_pixel > right - MIN_SELECTION_WIDTH_PX {
                left = right - MIN_SELECTION_WIDTH_PX;
            }
        }
        Handle::End => {
            right = proposed_pixel;
            if proposed_pixel > plot_width {
                right = plot_width;
            }
            if proposed_pixel < left + MIN_SELECTION_WIDTH_PX {
                right = left + MIN_SELECTION_WIDTH_PX;
            }
        }
        Handle::Move => {
            let dx = proposed_pixel - anchor_pixel;
            if left + dx < 0.0 {
                right -= left;
                left = 0.0;
            } else if right + dx > plot_width {
                left = plot_width - (right - left);
                right = plot_width;
            } else {
                left += dx;
                right += dx;
            }
        }
    }

    PixelInterval::new(left, right)
}
