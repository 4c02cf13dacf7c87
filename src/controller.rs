//! The per-plot interaction controller for the polygon lasso.
//!
//! One controller per tool per plot.  It owns the transient vertex buffer,
//! reacts to the events in [`ToolEvent`](crate::events::ToolEvent), keeps
//! the overlay preview in sync, and on a finalizing double tap assembles a
//! selection-geometry request for the host's selection executor.
//!
//! Every handler runs synchronously to completion; nothing here blocks or
//! spawns.  Anomalous input (out-of-frame taps, degenerate polygons, a
//! missing callback) is a silent no-op.

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::events::{KeyEvent, TapEvent, ToolEvent};
use crate::geometry::PolyGeometry;
use crate::host::{CallbackPayload, PlotFrame, RendererScales, SelectContext, SelectionExecutor};
use crate::overlay::PolyOverlay;
use crate::tool::{PolySelectTool, ToolActivation};

/// History tag recorded for every finalized lasso selection.
pub const HISTORY_TAG: &str = "poly_select";

/// The transient vertex buffer: parallel screen-space coordinate sequences
/// in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PolyVertices {
    pub sx: Vec<f32>,
    pub sy: Vec<f32>,
}

impl PolyVertices {
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.sx.len(), self.sy.len());
        self.sx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sx.is_empty()
    }

    fn push(&mut self, sx: f32, sy: f32) {
        self.sx.push(sx);
        self.sy.push(sy);
    }

    fn clear(&mut self) {
        self.sx.clear();
        self.sy.clear();
    }
}

/// Interaction controller: accumulates lasso vertices, previews them on the
/// overlay, and submits the finished polygon to the selection pipeline.
pub struct PolySelectController {
    tool: Arc<PolySelectTool>,
    overlay: Arc<Mutex<PolyOverlay>>,
    data: PolyVertices,
    activation_rx: Option<Receiver<bool>>,
}

impl PolySelectController {
    /// Create a controller for the given tool configuration.
    pub fn new(tool: Arc<PolySelectTool>) -> Self {
        let overlay = Arc::clone(&tool.overlay);
        Self {
            tool,
            overlay,
            data: PolyVertices::default(),
            activation_rx: None,
        }
    }

    /// Create a controller subscribed to an activation handle; call
    /// [`poll_activation`](Self::poll_activation) once per frame to observe
    /// deactivations.
    pub fn with_activation(tool: Arc<PolySelectTool>, activation: &ToolActivation) -> Self {
        let mut controller = Self::new(tool);
        controller.activation_rx = Some(activation.subscribe());
        controller
    }

    /// The accumulated vertices (read-only; mutation happens through event
    /// handlers).
    pub fn vertices(&self) -> &PolyVertices {
        &self.data
    }

    pub fn tool(&self) -> &PolySelectTool {
        &self.tool
    }

    /// Dispatch one event from the structured union.
    pub fn handle(&mut self, event: &ToolEvent, frame: &PlotFrame, ctx: &mut SelectContext<'_>) {
        match event {
            ToolEvent::Tap(ev) => self.tap(ev, frame),
            ToolEvent::DoubleTap(ev) => self.double_tap(ev, ctx),
            ToolEvent::KeyUp(ev) => self.key_up(ev),
            ToolEvent::ActiveChanged(active) => self.activation_changed(*active),
        }
    }

    /// Deactivation abandons the in-progress lasso; activation has no
    /// effect.
    pub fn activation_changed(&mut self, active: bool) {
        if !active {
            self.clear_data();
        }
    }

    /// Drain the activation subscription and clear state if the tool was
    /// switched off since the last poll.
    pub fn poll_activation(&mut self) {
        let mut deactivated = false;
        if let Some(rx) = &self.activation_rx {
            while let Ok(active) = rx.try_recv() {
                if !active {
                    deactivated = true;
                }
            }
        }
        if deactivated {
            self.activation_changed(false);
        }
    }

    /// Enter abandons the in-progress lasso without selecting; every other
    /// key is ignored.
    pub fn key_up(&mut self, ev: &KeyEvent) {
        if ev.key == egui::Key::Enter {
            self.clear_data();
        }
    }

    /// A single tap appends a vertex and refreshes the overlay preview.
    /// Taps outside the plot frame are ignored.
    pub fn tap(&mut self, ev: &TapEvent, frame: &PlotFrame) {
        let (sx, sy) = (ev.pos.x, ev.pos.y);
        if !frame.contains(sx, sy) {
            return;
        }
        self.data.push(sx, sy);
        self.push_preview();
    }

    /// A double tap finalizes the polygon: run the selection, record a
    /// history entry, then clear transient state.  State is cleared
    /// regardless of whether the selection matched anything.
    pub fn double_tap(&mut self, ev: &TapEvent, ctx: &mut SelectContext<'_>) {
        let append = ev.modifiers.shift;
        self.do_select(&self.data.sx, &self.data.sy, true, append, ctx.executor);
        ctx.history
            .push_state(HISTORY_TAG, ctx.executor.current_selection());
        self.clear_data();
    }

    /// Assemble a tagged geometry request and delegate to the host's
    /// selection routine.  Hit-testing lives entirely on the host side.
    pub fn do_select(
        &self,
        sx: &[f32],
        sy: &[f32],
        is_final: bool,
        append: bool,
        executor: &mut dyn SelectionExecutor,
    ) {
        let geometry = PolyGeometry::new(sx.to_vec(), sy.to_vec());
        executor.select(&geometry, is_final, append);
    }

    /// Invert the polygon through the first renderer's scales and invoke the
    /// configured callback with the enriched request.  Silent no-op when no
    /// callback, no renderer, or no matching scales exist.  The host's
    /// selection logic decides when to call this (after a finalized,
    /// non-empty selection).
    pub fn emit_callback(
        &self,
        geometry: &PolyGeometry,
        frame: &PlotFrame,
        renderers: &[&dyn RendererScales],
    ) {
        let callback = match self.tool.callback.as_ref() {
            Some(cb) => cb,
            None => return,
        };
        let renderer = match renderers.first() {
            Some(r) => r,
            None => return,
        };
        let xscale = match frame.xscale(renderer.x_range_name()) {
            Some(s) => s,
            None => return,
        };
        let yscale = match frame.yscale(renderer.y_range_name()) {
            Some(s) => s,
            None => return,
        };

        let x = xscale.v_invert(&geometry.sx);
        let y = yscale.v_invert(&geometry.sy);
        let enriched = geometry.clone().with_data_space(x, y);
        callback.execute(&self.tool, &CallbackPayload { geometry: enriched });
    }

    fn push_preview(&self) {
        let mut overlay = self.overlay.lock().unwrap();
        overlay.update(&self.data.sx, &self.data.sy);
    }

    fn clear_data(&mut self) {
        self.data.clear();
        self.overlay.lock().unwrap().clear();
    }
}
