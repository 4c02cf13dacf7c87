//! Persistence round-trips for overlay style and tool options.

use eframe::egui::{Color32, Stroke};
use lassoplot::persistence::{
    options_from_json, options_to_json, OverlayStyleSerde, ToolOptionsSerde,
};
use lassoplot::{OverlayStyle, PolySelectTool};

#[test]
fn style_round_trips_exactly() {
    let style = OverlayStyle {
        fill: Color32::from_rgba_premultiplied(90, 90, 90, 128),
        line: Stroke::new(3.5, Color32::from_rgb(10, 20, 30)),
        dash: [6.0, 2.0],
    };
    let ser = OverlayStyleSerde::from(&style);
    assert_eq!(ser.into_style(), style);
}

#[test]
fn default_style_round_trips_through_json() {
    let style = OverlayStyle::default();
    let ser = OverlayStyleSerde::from(&style);
    let txt = serde_json::to_string(&ser).unwrap();
    let back: OverlayStyleSerde = serde_json::from_str(&txt).unwrap();
    assert_eq!(back.into_style(), style);
}

#[test]
fn tool_options_round_trip() {
    let tool = PolySelectTool::new().with_order(3).with_overlay_style(OverlayStyle {
        fill: Color32::from_rgba_premultiplied(0, 0, 0, 0),
        line: Stroke::new(1.0, Color32::WHITE),
        dash: [2.0, 8.0],
    });

    let options = ToolOptionsSerde::from(&tool);
    let json = options_to_json(&options).unwrap();
    let restored = options_from_json(&json).unwrap();
    assert_eq!(restored, options);

    let rebuilt = restored.into_tool();
    assert_eq!(rebuilt.default_order, 3);
    assert_eq!(rebuilt.overlay.lock().unwrap().style.dash, [2.0, 8.0]);
    assert!(rebuilt.callback.is_none());
}

#[test]
fn options_json_is_self_describing() {
    let options = ToolOptionsSerde::from(&PolySelectTool::new());
    let json = options_to_json(&options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["default_order"], 11);
    assert!(value["overlay_style"]["fill_rgba"].is_array());
    assert_eq!(value["overlay_style"]["dash"], serde_json::json!([4.0, 4.0]));
}

#[test]
fn malformed_json_is_reported() {
    let err = options_from_json("{not json").unwrap_err();
    assert!(!err.is_empty());
}
