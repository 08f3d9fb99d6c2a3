//! Replay: deterministically redraw a recorded signature onto a blank
//! surface.
//!
//! Replay is a pure function of the record and the target surface. It
//! reads no session state, so a record loaded from storage renders
//! exactly like one captured a moment ago.

use tracing::debug;

use crate::config::parse_hex_color;
use crate::surface::DrawingSurface;
use crate::types::{GestureAction, SignatureRecord};

/// Replay setup failures.
///
/// These are the only loud errors in the crate: a record whose render
/// configuration is unusable is rejected before any pixel is touched.
/// Everything else (dangling continuations, empty logs) is tolerated
/// silently.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unparseable pen color {0:?} (expected #rgb or #rrggbb)")]
    PenColor(String),
    #[error("pen width {0} is not a positive finite number")]
    PenWidth(f32),
}

/// Redraw a recorded signature onto `surface`.
///
/// The surface is cleared first, the pen is configured from the record,
/// and the stroke log is walked in order: each `GestureStart` opens a
/// fresh path (flushing a still-open one), each `GestureContinue` inside
/// a gesture extends it, and each open path is committed with a single
/// stroke. A `GestureContinue` with no open gesture is skipped. An empty
/// log yields a cleared, blank surface.
pub fn render(
    record: &SignatureRecord,
    surface: &mut dyn DrawingSurface,
) -> Result<(), RenderError> {
    let color = parse_hex_color(&record.pen_color)?;
    if !record.pen_width.is_finite() || record.pen_width <= 0.0 {
        return Err(RenderError::PenWidth(record.pen_width));
    }

    surface.clear();
    surface.set_pen(color, record.pen_width);

    let mut in_gesture = false;
    for event in record.stroke_log.events() {
        match event.action {
            GestureAction::GestureStart => {
                if in_gesture {
                    // Previous gesture was never implicitly closed;
                    // flush it before starting over.
                    surface.stroke();
                    surface.close_path();
                }
                surface.begin_path(event.pos());
                in_gesture = true;
            }
            GestureAction::GestureContinue if in_gesture => {
                surface.line_to(event.pos());
            }
            GestureAction::GestureContinue => {
                debug!("skipping dangling gestureContinue at ({}, {})", event.x, event.y);
            }
        }
    }
    if in_gesture {
        surface.stroke();
        surface.close_path();
    }

    debug!(
        "rendered {} events, {} gestures",
        record.stroke_log.len(),
        record.stroke_log.gestures().count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CpuSurface;
    use crate::types::{PointEvent, StrokeLog};
    use glam::Vec2;

    fn record(events: &[(f32, f32, GestureAction)]) -> SignatureRecord {
        let mut log = StrokeLog::new();
        for (i, &(x, y, action)) in events.iter().enumerate() {
            log.push(PointEvent {
                x,
                y,
                t: i as u64 * 10,
                action,
            });
        }
        SignatureRecord {
            stroke_log: log,
            pen_color: "#191970".to_string(),
            pen_width: 3.0,
        }
    }

    /// Surface mock that records the operations issued to it.
    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        SetPen([f32; 4], f32),
        BeginPath(Vec2),
        LineTo(Vec2),
        Stroke,
        ClosePath,
    }

    impl DrawingSurface for RecordingSurface {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn set_pen(&mut self, color: [f32; 4], width: f32) {
            self.ops.push(Op::SetPen(color, width));
        }
        fn begin_path(&mut self, at: Vec2) {
            self.ops.push(Op::BeginPath(at));
        }
        fn line_to(&mut self, to: Vec2) {
            self.ops.push(Op::LineTo(to));
        }
        fn stroke(&mut self) {
            self.ops.push(Op::Stroke);
        }
        fn close_path(&mut self) {
            self.ops.push(Op::ClosePath);
        }
    }

    #[test]
    fn test_round_trip_two_segments_one_stroke() {
        use GestureAction::*;
        let record = record(&[
            (10.0, 10.0, GestureStart),
            (20.0, 15.0, GestureContinue),
            (30.0, 25.0, GestureContinue),
        ]);

        let mut surface = RecordingSurface::default();
        render(&record, &mut surface).unwrap();

        assert_eq!(
            surface.ops,
            vec![
                Op::Clear,
                Op::SetPen(
                    crate::config::parse_hex_color("#191970").unwrap(),
                    3.0
                ),
                Op::BeginPath(Vec2::new(10.0, 10.0)),
                Op::LineTo(Vec2::new(20.0, 15.0)),
                Op::LineTo(Vec2::new(30.0, 25.0)),
                Op::Stroke,
                Op::ClosePath,
            ]
        );
    }

    #[test]
    fn test_multi_gesture_issues_two_strokes() {
        use GestureAction::*;
        let record = record(&[
            (0.0, 0.0, GestureStart),
            (5.0, 5.0, GestureContinue),
            (50.0, 50.0, GestureStart),
            (60.0, 60.0, GestureContinue),
        ]);

        let mut surface = RecordingSurface::default();
        render(&record, &mut surface).unwrap();

        let strokes = surface.ops.iter().filter(|op| **op == Op::Stroke).count();
        assert_eq!(strokes, 2);

        // First path is flushed and closed before the second opens
        let close_pos = surface
            .ops
            .iter()
            .position(|op| *op == Op::ClosePath)
            .unwrap();
        let second_begin = surface
            .ops
            .iter()
            .position(|op| *op == Op::BeginPath(Vec2::new(50.0, 50.0)))
            .unwrap();
        assert!(close_pos < second_begin);
    }

    #[test]
    fn test_dangling_continuation_is_inert() {
        use GestureAction::*;
        let with_dangle = record(&[
            (99.0, 99.0, GestureContinue),
            (10.0, 10.0, GestureStart),
            (20.0, 20.0, GestureContinue),
        ]);
        let without = record(&[
            (10.0, 10.0, GestureStart),
            (20.0, 20.0, GestureContinue),
        ]);

        let mut a = RecordingSurface::default();
        let mut b = RecordingSurface::default();
        render(&with_dangle, &mut a).unwrap();
        render(&without, &mut b).unwrap();
        assert_eq!(a.ops, b.ops);
    }

    #[test]
    fn test_empty_log_renders_blank() {
        let record = SignatureRecord {
            stroke_log: StrokeLog::new(),
            pen_color: "#000000".to_string(),
            pen_width: 2.0,
        };

        let mut surface = CpuSurface::new(16, 16);
        // Dirty the surface first to prove render clears it
        surface.set_pen([1.0; 4], 4.0);
        surface.begin_path(Vec2::new(0.0, 0.0));
        surface.line_to(Vec2::new(15.0, 15.0));
        surface.stroke();

        render(&record, &mut surface).unwrap();
        let blank = CpuSurface::new(16, 16);
        assert_eq!(surface.as_bytes(), blank.as_bytes());
    }

    #[test]
    fn test_replay_determinism_on_cpu_surfaces() {
        use GestureAction::*;
        let record = record(&[
            (4.0, 4.0, GestureStart),
            (20.0, 10.0, GestureContinue),
            (12.0, 24.0, GestureContinue),
            (26.0, 26.0, GestureStart),
            (30.0, 6.0, GestureContinue),
        ]);

        let mut a = CpuSurface::new(40, 40);
        let mut b = CpuSurface::new(40, 40);
        render(&record, &mut a).unwrap();
        render(&record, &mut b).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_bad_config_fails_before_touching_surface() {
        use GestureAction::*;
        let mut bad_color = record(&[(0.0, 0.0, GestureStart)]);
        bad_color.pen_color = "cornflower".to_string();

        let mut surface = RecordingSurface::default();
        assert!(matches!(
            render(&bad_color, &mut surface),
            Err(RenderError::PenColor(_))
        ));
        assert!(surface.ops.is_empty());

        let mut bad_width = record(&[(0.0, 0.0, GestureStart)]);
        bad_width.pen_width = 0.0;
        assert!(matches!(
            render(&bad_width, &mut surface),
            Err(RenderError::PenWidth(_))
        ));
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_recorded_session_replays_identically() {
        use crate::config::PenStyle;
        use crate::session::CaptureSession;

        let mut session = CaptureSession::new(PenStyle::new("#ff0000", 2.0));
        session.begin_gesture(Vec2::new(10.0, 10.0), 1000);
        session.continue_gesture(Vec2::new(20.0, 15.0), 1016);
        session.continue_gesture(Vec2::new(30.0, 25.0), 1033);
        session.end_gesture();

        let exported = session.accept();
        // Round-trip through the wire format, as a storage boundary would
        let json = serde_json::to_string(&exported).unwrap();
        let loaded: SignatureRecord = serde_json::from_str(&json).unwrap();

        let mut live = CpuSurface::new(48, 48);
        let mut stored = CpuSurface::new(48, 48);
        render(&exported, &mut live).unwrap();
        render(&loaded, &mut stored).unwrap();
        assert_eq!(live.as_bytes(), stored.as_bytes());
    }
}
