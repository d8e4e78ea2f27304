use super::*;
use crate::reveal::surface::ScratchOpts;
use crate::style::surface_style::{SurfacePreset, SurfaceStyle};

#[test]
fn parses_events_with_optional_geometry() {
    let script = ReplayScript::from_json_str(
        r#"{
          "geometry": { "left": 0, "top": 0, "width": 400, "height": 400 },
          "events": [
            { "type": "mouse_down" },
            { "type": "mouse_move", "x": 100, "y": 100 },
            { "type": "mouse_move", "x": 50, "y": 50,
              "geometry": { "left": 0, "top": 0, "width": 200, "height": 200 } },
            { "type": "touch_move", "touches": [] },
            { "type": "mouse_up" }
          ]
        }"#,
    )
    .unwrap();
    assert_eq!(script.events.len(), 5);
    assert_eq!(script.events[0].event, InputEvent::MouseDown);
    assert!(script.events[1].geometry.is_none());
    assert_eq!(script.events[2].geometry.map(|g| g.width), Some(200.0));
}

#[test]
fn rejects_unknown_event_types() {
    let err = ReplayScript::from_json_str(
        r#"{ "geometry": { "left": 0, "top": 0, "width": 1, "height": 1 },
             "events": [ { "type": "pinch" } ] }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn replay_reports_reveal_event() {
    let opts = ScratchOpts::for_preset(SurfacePreset::Circular);
    let mut surface = ScratchSurface::mount(
        opts,
        SurfaceStyle::circular().without_label(),
        (),
        || {},
    )
    .unwrap();

    let mut events = vec![ScriptedEvent::from(InputEvent::MouseDown)];
    // Sweep rows 25 apart; radius 25 leaves almost nothing behind.
    for row in 0..12 {
        for col in 0..31 {
            events.push(
                InputEvent::MouseMove {
                    x: f64::from(col) * 10.0,
                    y: 12.5 + f64::from(row) * 25.0,
                }
                .into(),
            );
        }
    }
    events.push(InputEvent::MouseUp.into());
    let script = ReplayScript {
        geometry: DisplayGeometry::new(0.0, 0.0, 300.0, 300.0),
        events,
    };

    let report = replay(&mut surface, &script);
    assert_eq!(report.events, script.events.len());
    let at = report.revealed_at_event.unwrap();
    assert!(at > 1 && at < script.events.len() - 1);
    assert!(surface.is_revealed());
    assert_eq!(report.stats.revealed_at_stroke, Some(at as u64));
    assert!(report.coverage > 0.45);
}
