use tracing::{debug, warn};

use crate::core::{AxisTransform, DataPoint, Viewport, clamp};
use crate::error::{OverlayError, OverlayResult};
use crate::extensions::{OverlayContext, OverlayEvent, OverlayObserver};
use crate::interaction::{ControllerState, CursorIcon, InteractionController, PointerButton};
use crate::render::{BandPrimitive, LineJoin, OverlayFrame, Renderer};
use crate::selection::{CommittedRange, PixelInterval, SelectionRange, resolve_default_range};

use super::RangeSelectionConfig;

/// Alpha factor applied to the configured color for the band outline.
pub const BAND_STROKE_ALPHA: f64 = 0.9;
/// Alpha factor applied to the configured color for the band interior.
pub const BAND_FILL_ALPHA: f64 = 0.4;
pub const BAND_STROKE_WIDTH_PX: f64 = 3.0;
pub const BAND_CORNER_RADIUS_PX: f64 = 3.0;

type RangeCallback = Box<dyn FnMut(CommittedRange)>;

/// Range-selection overlay façade.
///
/// Owns the committed [`SelectionRange`] and the interaction state
/// machine, and wires pointer events, frame building, the completion
/// callback, and observer notifications together. The host delivers
/// pointer events in plot-relative pixel coordinates, supplies the axis
/// transform fresh on every call (the mapping may change between frames
/// under zoom/pan), and drains the coalesced redraw flag from its render
/// loop.
///
/// The pointer-release listener must be registered document-wide by the
/// host: a drag session only ends on release, and the release may land
/// anywhere, not just over the chart surface.
pub struct RangeSelectionOverlay {
    config: RangeSelectionConfig,
    range: SelectionRange,
    controller: InteractionController,
    points: Vec<DataPoint>,
    callback: Option<RangeCallback>,
    observers: Vec<Box<dyn OverlayObserver>>,
    redraw_requested: bool,
    last_viewport: Viewport,
}

impl RangeSelectionOverlay {
    #[must_use]
    pub fn new(config: RangeSelectionConfig) -> Self {
        Self {
            range: SelectionRange::new(config.start, config.end),
            config,
            controller: InteractionController::new(),
            points: Vec::new(),
            callback: None,
            observers: Vec::new(),
            redraw_requested: false,
            last_viewport: Viewport::new(0, 0),
        }
    }

    /// Replaces the data series consulted by default-range resolution.
    ///
    /// The series must be non-empty; violating that is a configuration
    /// error reported here, at setup time, rather than per frame.
    pub fn set_data(&mut self, points: &[DataPoint]) -> OverlayResult<()> {
        if points.is_empty() {
            return Err(OverlayError::EmptySeries);
        }
        self.points = points.to_vec();
        Ok(())
    }

    /// Sets the callback invoked synchronously once per completed drag.
    pub fn set_callback(&mut self, callback: impl FnMut(CommittedRange) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn add_observer(&mut self, observer: Box<dyn OverlayObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn config(&self) -> &RangeSelectionConfig {
        &self.config
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Toggles the overlay. Disabling mid-drag closes the open session
    /// without committing, so `SessionStarted`/`SessionEnded` stay paired.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        if !enabled {
            if self.controller.end_session().is_some() {
                self.emit_event(OverlayEvent::SessionEnded);
            }
            self.request_redraw();
        }
    }

    /// Committed value-space bounds, if resolved yet.
    #[must_use]
    pub fn selected_range(&self) -> Option<(f64, f64)> {
        self.range.resolved()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Cursor the host should currently display over the chart surface.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        match self.controller.state() {
            ControllerState::Idle => CursorIcon::Default,
            ControllerState::Hovering(cursor) => cursor,
            ControllerState::Dragging(session) => {
                InteractionController::cursor_for_handle(session.handle)
            }
        }
    }

    /// Drains the coalesced redraw flag; the host calls this from its
    /// render loop and repaints the overlay when it returns `true`.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Hook for the host's full-redraw pass: the overlay repaints on top
    /// of every full chart draw.
    pub fn notify_full_redraw(&mut self) {
        self.request_redraw();
    }

    /// Pointer-move entry point.
    ///
    /// Outside a session this only refreshes hover-cursor feedback; inside
    /// one it records the live proposal and requests a redraw. Negative
    /// raw coordinates mean "outside the chart" and short-circuit to the
    /// default cursor.
    pub fn on_pointer_move<A: AxisTransform>(
        &mut self,
        x: f64,
        y: f64,
        axis: &A,
        viewport: Viewport,
    ) -> CursorIcon {
        self.last_viewport = viewport;
        if !self.config.enabled {
            self.controller.reset();
            return CursorIcon::Default;
        }
        if x < 0.0 || y < 0.0 {
            self.controller.set_hover(CursorIcon::Default);
            return CursorIcon::Default;
        }

        let plot_width = f64::from(viewport.width);
        let clamped = clamp(0.0, x, plot_width);

        if self.controller.update_proposal(clamped) {
            self.request_redraw();
            return self.cursor();
        }

        let Ok(bounds) = self.ensure_resolved() else {
            self.controller.set_hover(CursorIcon::Default);
            return CursorIcon::Default;
        };
        let interval = Self::pixel_interval(axis, bounds);
        let cursor = InteractionController::hover_cursor(clamped, interval, plot_width);
        self.controller.set_hover(cursor);
        cursor
    }

    /// Pointer-down entry point; opens a drag session on a primary-button
    /// press.
    ///
    /// Presses that match neither handle open a move session, even when
    /// the pointer is outside the band. A press while a session is
    /// already open is ignored: the session stays single and ends only
    /// on release.
    pub fn on_pointer_down<A: AxisTransform>(
        &mut self,
        x: f64,
        button: PointerButton,
        axis: &A,
        viewport: Viewport,
    ) -> CursorIcon {
        self.last_viewport = viewport;
        if !self.config.enabled {
            return CursorIcon::Default;
        }
        if button != PointerButton::Primary {
            return self.cursor();
        }
        if self.controller.is_dragging() {
            warn!("ignoring pointer press while a drag session is open");
            return self.cursor();
        }

        let plot_width = f64::from(viewport.width);
        let clamped = clamp(0.0, x, plot_width);

        let Ok(bounds) = self.ensure_resolved() else {
            warn!("ignoring pointer press: selection range cannot resolve without data");
            return CursorIcon::Default;
        };
        let interval = Self::pixel_interval(axis, bounds);
        let handle = InteractionController::classify_press(clamped, interval);
        self.controller.begin_session(handle, interval, clamped);
        self.emit_event(OverlayEvent::SessionStarted { handle });
        InteractionController::cursor_for_handle(handle)
    }

    /// Pointer-release entry point; commits the drag and fires the
    /// callback.
    ///
    /// The release position becomes the final proposal, the constraint
    /// function turns it into the committed pixel interval, and both
    /// bounds are converted back to value space. Releases with no open
    /// session are ignored.
    pub fn on_pointer_release<A: AxisTransform>(
        &mut self,
        x: f64,
        axis: &A,
        viewport: Viewport,
    ) -> Option<CommittedRange> {
        self.last_viewport = viewport;
        if !self.config.enabled {
            return None;
        }
        let Some(mut session) = self.controller.end_session() else {
            warn!("ignoring pointer release without an open drag session");
            return None;
        };

        let plot_width = f64::from(viewport.width);
        session.proposed_pixel = clamp(0.0, x, plot_width);

        let Some(bounds) = self.range.resolved() else {
            // A session can only open against a resolved range.
            self.emit_event(OverlayEvent::SessionEnded);
            return None;
        };
        let interval = Self::pixel_interval(axis, bounds);
        let constrained = session.constrained(interval, plot_width);

        let start = axis.pixel_to_value(constrained.left);
        let end = axis.pixel_to_value(constrained.right);
        self.range.commit(start, end);
        self.emit_event(OverlayEvent::SessionEnded);
        self.request_redraw();
        debug!(start, end, "committed selection range");

        let committed = CommittedRange { start, end };
        if let Some(callback) = self.callback.as_mut() {
            callback(committed);
        }
        self.emit_event(OverlayEvent::RangeCommitted { start, end });
        Some(committed)
    }

    /// Builds the scene for one overlay draw pass.
    ///
    /// During a drag the band is recomputed from the session's live
    /// proposal through the constraint function; otherwise the committed
    /// range is resolved (consulting the default range resolver on first
    /// need) and projected through the axis transform.
    pub fn build_overlay_frame<A: AxisTransform>(
        &mut self,
        axis: &A,
        viewport: Viewport,
    ) -> OverlayResult<OverlayFrame> {
        if !viewport.is_valid() {
            return Err(OverlayError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.last_viewport = viewport;

        let frame = OverlayFrame::new(viewport);
        if !self.config.enabled {
            return Ok(frame);
        }

        let plot_width = f64::from(viewport.width);
        let interval = if let Some(session) = self.controller.session().copied() {
            let bounds = self.range.resolved().ok_or_else(|| {
                OverlayError::InvalidData(
                    "drag session open against an unresolved range".to_owned(),
                )
            })?;
            session.constrained(Self::pixel_interval(axis, bounds), plot_width)
        } else {
            let bounds = self.ensure_resolved()?;
            Self::pixel_interval(axis, bounds)
        };

        Ok(frame.with_band(self.band_primitive(interval, viewport)))
    }

    /// Builds the current frame and hands it to `renderer`.
    pub fn render<A: AxisTransform, R: Renderer>(
        &mut self,
        axis: &A,
        viewport: Viewport,
        renderer: &mut R,
    ) -> OverlayResult<()> {
        let frame = self.build_overlay_frame(axis, viewport)?;
        renderer.render(&frame)
    }

    fn ensure_resolved(&mut self) -> OverlayResult<(f64, f64)> {
        if let Some(bounds) = self.range.resolved() {
            return Ok(bounds);
        }
        let (start, end) =
            resolve_default_range(&self.points, self.config.start, self.config.end)?;
        self.range.commit(start, end);
        debug!(start, end, "resolved default selection range");
        Ok((start, end))
    }

    fn pixel_interval<A: AxisTransform>(axis: &A, bounds: (f64, f64)) -> PixelInterval {
        PixelInterval::new(
            axis.value_to_pixel(bounds.0),
            axis.value_to_pixel(bounds.1),
        )
    }

    fn band_primitive(&self, interval: PixelInterval, viewport: Viewport) -> BandPrimitive {
        let color = self.config.color;
        BandPrimitive {
            x: interval.left,
            y: 0.0,
            width: interval.width(),
            height: f64::from(viewport.height),
            corner_radius: BAND_CORNER_RADIUS_PX,
            fill: color.with_alpha_scaled(BAND_FILL_ALPHA),
            stroke: color.with_alpha_scaled(BAND_STROKE_ALPHA),
            stroke_width: BAND_STROKE_WIDTH_PX,
            line_join: LineJoin::Round,
        }
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn emit_event(&mut self, event: OverlayEvent) {
        let context = OverlayContext {
            viewport: self.last_viewport,
            enabled: self.config.enabled,
            dragging: self.controller.is_dragging(),
            range_start: self.range.start(),
            range_end: self.range.end(),
        };
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
