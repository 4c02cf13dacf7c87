//! Tool persistence: save and load lasso options to/from JSON files.
//!
//! Serializable mirror types for the style values that cannot directly
//! derive serde traits (egui `Color32`/`Stroke`).

use std::path::Path;

use eframe::egui::{Color32, Stroke};
use serde::{Deserialize, Serialize};

use crate::overlay::OverlayStyle;
use crate::tool::PolySelectTool;

// ---------- Serializable mirror types ----------

/// Serializable version of OverlayStyle.  Colors are stored as raw
/// premultiplied RGBA channel bytes so round-trips are exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyleSerde {
    pub fill_rgba: [u8; 4],
    pub line_rgba: [u8; 4],
    pub line_width: f32,
    pub dash: [f32; 2],
}

impl From<&OverlayStyle> for OverlayStyleSerde {
    fn from(s: &OverlayStyle) -> Self {
        Self {
            fill_rgba: [s.fill.r(), s.fill.g(), s.fill.b(), s.fill.a()],
            line_rgba: [
                s.line.color.r(),
                s.line.color.g(),
                s.line.color.b(),
                s.line.color.a(),
            ],
            line_width: s.line.width,
            dash: s.dash,
        }
    }
}

impl OverlayStyleSerde {
    /// Convert back to an OverlayStyle.
    pub fn into_style(self) -> OverlayStyle {
        let [fr, fg, fb, fa] = self.fill_rgba;
        let [lr, lg, lb, la] = self.line_rgba;
        OverlayStyle {
            fill: Color32::from_rgba_premultiplied(fr, fg, fb, fa),
            line: Stroke::new(
                self.line_width,
                Color32::from_rgba_premultiplied(lr, lg, lb, la),
            ),
            dash: self.dash,
        }
    }
}

/// Serializable tool options: the fields a host may persist between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOptionsSerde {
    pub default_order: i32,
    pub overlay_style: OverlayStyleSerde,
}

impl From<&PolySelectTool> for ToolOptionsSerde {
    fn from(tool: &PolySelectTool) -> Self {
        let style = tool.overlay.lock().unwrap().style.clone();
        Self {
            default_order: tool.default_order,
            overlay_style: OverlayStyleSerde::from(&style),
        }
    }
}

impl ToolOptionsSerde {
    /// Build a tool configuration from the stored options.  The callback is
    /// not persistable and stays unset.
    pub fn into_tool(self) -> PolySelectTool {
        PolySelectTool::new()
            .with_order(self.default_order)
            .with_overlay_style(self.overlay_style.into_style())
    }
}

// ---------- Public API ----------

/// Serialize tool options as pretty JSON.
pub fn options_to_json(options: &ToolOptionsSerde) -> Result<String, String> {
    serde_json::to_string_pretty(options).map_err(|e| e.to_string())
}

/// Deserialize tool options from JSON.
pub fn options_from_json(json: &str) -> Result<ToolOptionsSerde, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Save tool options to a JSON file at the given path.
pub fn save_options_to_path(options: &ToolOptionsSerde, path: &Path) -> Result<(), String> {
    let txt = options_to_json(options)?;
    std::fs::write(path, txt).map_err(|e| e.to_string())
}

/// Load tool options from a JSON file at the given path.
pub fn load_options_from_path(path: &Path) -> Result<ToolOptionsSerde, String> {
    let txt = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    options_from_json(&txt)
}
