use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Action tag for a point event in the stroke log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureAction {
    /// First point of a gesture (surface contact)
    GestureStart,
    /// Subsequent point within the same gesture
    GestureContinue,
}

/// One record in the stroke log.
///
/// Coordinates are surface-local (origin at the drawing surface's top-left).
/// `t` is milliseconds since the start of the enclosing gesture, not
/// wall-clock time; it resets to 0 at each `GestureStart`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointEvent {
    pub x: f32,
    pub y: f32,
    pub t: u64,
    pub action: GestureAction,
}

impl PointEvent {
    /// Position as a vector, for segment math
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Ordered sequence of point events describing zero or more gestures.
///
/// Insertion order is temporal order is replay order. Append-only during
/// capture; fully replaceable on clear. A gesture is a maximal run starting
/// with `GestureStart` followed by zero or more `GestureContinue` events.
/// Gesture end is implicit: it is inferred from the next `GestureStart` or
/// the end of the log. Do not add an explicit end tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeLog(Vec<PointEvent>);

impl StrokeLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Insertion order must match temporal order.
    pub fn push(&mut self, event: PointEvent) {
        self.0.push(event);
    }

    /// Drop all events.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All events in replay order.
    pub fn events(&self) -> &[PointEvent] {
        &self.0
    }

    /// Last event in the log, if any.
    pub fn last(&self) -> Option<&PointEvent> {
        self.0.last()
    }

    /// Iterate over gestures: maximal `GestureStart..GestureContinue*` runs.
    ///
    /// Dangling `GestureContinue` events with no preceding open start are
    /// inert and skipped rather than treated as an error.
    pub fn gestures(&self) -> Gestures<'_> {
        Gestures { rest: &self.0 }
    }
}

/// Iterator over the maximal gesture runs of a [`StrokeLog`].
#[derive(Debug)]
pub struct Gestures<'a> {
    rest: &'a [PointEvent],
}

impl<'a> Iterator for Gestures<'a> {
    type Item = &'a [PointEvent];

    fn next(&mut self) -> Option<&'a [PointEvent]> {
        // Skip anything before the next GestureStart
        while let Some(first) = self.rest.first() {
            if first.action == GestureAction::GestureStart {
                break;
            }
            self.rest = &self.rest[1..];
        }
        if self.rest.is_empty() {
            return None;
        }
        // Run extends until the next GestureStart or the end of the log
        let end = self.rest[1..]
            .iter()
            .position(|e| e.action == GestureAction::GestureStart)
            .map(|i| i + 1)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(run)
    }
}

/// The unit of export/import: a stroke log plus the render configuration
/// captured at recording time, so replay reproduces the original appearance
/// regardless of the current live configuration.
///
/// This is the only data that should cross a storage boundary; intermediaries
/// must treat it as an opaque, order-sensitive structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRecord {
    pub stroke_log: StrokeLog,
    pub pen_color: String,
    pub pen_width: f32,
}
