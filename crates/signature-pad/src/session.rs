//! Capture session: turns host pointer events into a stroke log.
//!
//! One session per drawing surface, owned by it and never shared. The
//! session runs on the surface's single logical thread: the host delivers
//! pointer-down, pointer-move, pointer-up synchronously and in order, so
//! no locking is needed around `is_drawing` or the log.

use glam::Vec2;
use tracing::debug;

use crate::config::PenStyle;
use crate::events::SessionEvent;
use crate::types::{GestureAction, PointEvent, SignatureRecord, StrokeLog};

/// Line segment the host should draw for live feedback after a
/// `continue_gesture` call: from the previously recorded point to the
/// newly recorded one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveSegment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Per-surface capture session state.
///
/// Lifecycle: created when the drawing surface is initialized, reset by
/// [`clear`](Self::clear) or [`cancel`](Self::cancel), dropped when the
/// surface is torn down.
///
/// All operations are infallible: points arriving outside an active
/// gesture are discarded, redundant clears and gesture ends are no-ops.
pub struct CaptureSession {
    log: StrokeLog,
    style: PenStyle,
    /// Host timestamp at the current gesture's start, milliseconds
    gesture_start_ms: u64,
    is_drawing: bool,
    listeners: Vec<Box<dyn Fn(&SessionEvent)>>,
}

impl std::fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("events", &self.log.len())
            .field("is_drawing", &self.is_drawing)
            .field("style", &self.style)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new(PenStyle::default())
    }
}

impl CaptureSession {
    /// Create a session with the given pen style.
    pub fn new(style: PenStyle) -> Self {
        Self {
            log: StrokeLog::new(),
            style,
            gesture_start_ms: 0,
            is_drawing: false,
            listeners: Vec::new(),
        }
    }

    /// Whether a gesture is currently open.
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// The stroke log recorded so far.
    pub fn log(&self) -> &StrokeLog {
        &self.log
    }

    /// The live pen style.
    pub fn style(&self) -> &PenStyle {
        &self.style
    }

    /// Replace the live pen style. Affects future exports, not events
    /// already in the log.
    pub fn set_style(&mut self, style: PenStyle) {
        self.style = style;
    }

    /// Register a hook for session lifecycle events.
    pub fn add_event_listener<F>(&mut self, listener: F)
    where
        F: Fn(&SessionEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&self, event: SessionEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    /// Start a gesture at a surface-local point.
    ///
    /// `host_ms` is the host's monotonic clock in milliseconds; subsequent
    /// `continue_gesture` timestamps are recorded relative to it. Safe to
    /// call while a gesture is already open: the open gesture is simply
    /// superseded (replay tolerates back-to-back starts).
    pub fn begin_gesture(&mut self, at: Vec2, host_ms: u64) {
        debug!("begin_gesture at ({:.1}, {:.1})", at.x, at.y);
        self.gesture_start_ms = host_ms;
        self.is_drawing = true;
        self.log.push(PointEvent {
            x: at.x,
            y: at.y,
            t: 0,
            action: GestureAction::GestureStart,
        });
        self.emit(SessionEvent::GestureStarted {
            timestamp_ms: host_ms,
        });
    }

    /// Extend the open gesture to a surface-local point.
    ///
    /// Returns the segment the host should draw for live feedback, or
    /// `None` when no gesture is open (a move with no button pressed is
    /// discarded, not an error).
    pub fn continue_gesture(&mut self, at: Vec2, host_ms: u64) -> Option<LiveSegment> {
        if !self.is_drawing {
            debug!("continue_gesture outside an active gesture, discarding");
            return None;
        }

        // Host clocks are monotonic per interaction; saturate rather than
        // panic if one misbehaves.
        let t = host_ms.saturating_sub(self.gesture_start_ms);
        let from = self.log.last().map(PointEvent::pos).unwrap_or(at);

        self.log.push(PointEvent {
            x: at.x,
            y: at.y,
            t,
            action: GestureAction::GestureContinue,
        });

        Some(LiveSegment { from, to: at })
    }

    /// Close the open gesture. Idempotent; appends nothing to the log
    /// (gesture end is implicit in the log structure).
    pub fn end_gesture(&mut self) {
        if !self.is_drawing {
            return;
        }
        self.is_drawing = false;
        self.emit(SessionEvent::GestureEnded);
    }

    /// Empty the log and close any open gesture. Idempotent.
    pub fn clear(&mut self) {
        debug!("clear ({} events dropped)", self.log.len());
        self.log.clear();
        self.is_drawing = false;
        self.emit(SessionEvent::Cleared);
    }

    /// Cancel the session: clear, then notify hooks. Goes through the
    /// same clear routine as an explicit clear (so `Cleared` fires too),
    /// with `Cancelled` following once the log is already empty.
    pub fn cancel(&mut self) {
        self.clear();
        self.emit(SessionEvent::Cancelled);
    }

    /// Export the signature recorded so far, with the current pen style
    /// baked in. Callable in any state, including mid-gesture.
    pub fn export(&self) -> SignatureRecord {
        SignatureRecord {
            stroke_log: self.log.clone(),
            pen_color: self.style.color.clone(),
            pen_width: self.style.width,
        }
    }

    /// Export and notify hooks that the signature was accepted (the OK
    /// action of a host UI).
    pub fn accept(&self) -> SignatureRecord {
        let record = self.export();
        self.emit(SessionEvent::Accepted(record.clone()));
        record
    }
}
