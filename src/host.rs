//! Collaborator interfaces provided by the host plotting framework.
//!
//! The lasso tool never renders data, hit-tests, or stores undo history
//! itself.  It talks to the host through the narrow capabilities defined
//! here: a plot frame with a containment test and named coordinate scales,
//! a selection executor, a history sink, and an optional selection
//! callback.  The [`plot_link`](crate::plot_link) module adapts a live
//! egui_plot chart to these interfaces; tests use simple mocks.

use std::collections::HashMap;
use std::sync::Arc;

use eframe::egui::{self, Rect};

use crate::geometry::PolyGeometry;
use crate::tool::PolySelectTool;

/// Range key used when a renderer does not name its axes explicitly.
pub const DEFAULT_RANGE: &str = "default";

/// A one-axis coordinate scale owned by the host, able to invert screen
/// coordinates back into data space.
pub trait DataScale: Send + Sync {
    /// Invert a single screen coordinate into data space.
    fn invert(&self, sv: f32) -> f64;

    /// Invert a vector of screen coordinates element-wise.
    fn v_invert(&self, svs: &[f32]) -> Vec<f64> {
        svs.iter().map(|&sv| self.invert(sv)).collect()
    }
}

/// The plotting frame: the screen-space region data is drawn into, plus the
/// named x/y scales renderers resolve their axes against.
pub struct PlotFrame {
    pub bbox: Rect,
    xscales: HashMap<String, Arc<dyn DataScale>>,
    yscales: HashMap<String, Arc<dyn DataScale>>,
}

impl PlotFrame {
    pub fn new(bbox: Rect) -> Self {
        Self {
            bbox,
            xscales: HashMap::new(),
            yscales: HashMap::new(),
        }
    }

    /// Build a frame with a single x/y scale pair registered under
    /// [`DEFAULT_RANGE`].
    pub fn with_scales(bbox: Rect, xscale: Arc<dyn DataScale>, yscale: Arc<dyn DataScale>) -> Self {
        let mut frame = Self::new(bbox);
        frame.insert_xscale(DEFAULT_RANGE, xscale);
        frame.insert_yscale(DEFAULT_RANGE, yscale);
        frame
    }

    pub fn insert_xscale(&mut self, range_name: &str, scale: Arc<dyn DataScale>) {
        self.xscales.insert(range_name.to_string(), scale);
    }

    pub fn insert_yscale(&mut self, range_name: &str, scale: Arc<dyn DataScale>) {
        self.yscales.insert(range_name.to_string(), scale);
    }

    /// Bounding-box containment test over screen coordinates.
    pub fn contains(&self, sx: f32, sy: f32) -> bool {
        self.bbox.contains(egui::pos2(sx, sy))
    }

    pub fn xscale(&self, range_name: &str) -> Option<Arc<dyn DataScale>> {
        self.xscales.get(range_name).cloned()
    }

    pub fn yscale(&self, range_name: &str) -> Option<Arc<dyn DataScale>> {
        self.yscales.get(range_name).cloned()
    }
}

/// A renderer's view of the frame scales: the named ranges its x and y
/// coordinates live in.
pub trait RendererScales {
    fn x_range_name(&self) -> &str {
        DEFAULT_RANGE
    }

    fn y_range_name(&self) -> &str {
        DEFAULT_RANGE
    }
}

/// The host's generic selection routine.  It owns hit-testing renderers
/// against the submitted geometry and updating the current selection; the
/// lasso only assembles requests and delegates.
pub trait SelectionExecutor {
    /// Run a selection for the given geometry.  `is_final` marks the
    /// completing request of a gesture; `append` extends the existing
    /// selection instead of replacing it.
    fn select(&mut self, geometry: &PolyGeometry, is_final: bool, append: bool);

    /// Snapshot of the host-owned current selection, used for history
    /// entries.  The payload is opaque to this crate.
    fn current_selection(&self) -> serde_json::Value;
}

/// Undo-history sink: receives a tag and an arbitrary snapshot payload.
pub trait HistorySink {
    fn push_state(&mut self, tag: &str, snapshot: serde_json::Value);
}

/// Payload delivered to a [`SelectionCallback`]: the geometry request
/// enriched with data-space coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackPayload {
    pub geometry: PolyGeometry,
}

/// User-supplied capability invoked after a finalized, non-empty selection.
pub trait SelectionCallback: Send + Sync {
    fn execute(&self, tool: &PolySelectTool, payload: &CallbackPayload);
}

impl<F> SelectionCallback for F
where
    F: Fn(&PolySelectTool, &CallbackPayload) + Send + Sync,
{
    fn execute(&self, tool: &PolySelectTool, payload: &CallbackPayload) {
        self(tool, payload)
    }
}

/// Borrowed bundle of the mutable host capabilities a finalizing gesture
/// needs: the selection executor and the history sink.
pub struct SelectContext<'a> {
    pub executor: &'a mut dyn SelectionExecutor,
    pub history: &'a mut dyn HistorySink,
}
