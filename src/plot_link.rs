//! egui_plot integration: adapts a live chart to the host interfaces.
//!
//! After a plot is shown, its [`egui_plot::PlotResponse`] carries everything
//! the lasso needs for one frame: the widget response (clicks), and the
//! [`egui_plot::PlotTransform`] (screen/data conversion plus the data
//! frame rect).  This module turns those into [`ToolEvent`]s, a
//! [`PlotFrame`], and [`DataScale`]s, and paints the overlay on top of the
//! finished chart.

use std::sync::Arc;

use eframe::egui::{self, Pos2};
use egui_plot::{PlotResponse, PlotTransform};

use crate::controller::PolySelectController;
use crate::events::{KeyEvent, KeyModifiers, TapEvent, ToolEvent};
use crate::geometry::ScreenPos;
use crate::host::{DataScale, PlotFrame, SelectContext};
use crate::overlay::PolyOverlay;
use crate::tool::{PolySelectTool, ToolActivation};

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// A [`DataScale`] backed by an `egui_plot` transform: inverts one screen
/// axis into plot (data) space.
#[derive(Clone, Copy)]
pub struct TransformScale {
    transform: PlotTransform,
    axis: Axis,
}

impl TransformScale {
    pub fn x(transform: PlotTransform) -> Self {
        Self {
            transform,
            axis: Axis::X,
        }
    }

    pub fn y(transform: PlotTransform) -> Self {
        Self {
            transform,
            axis: Axis::Y,
        }
    }
}

impl DataScale for TransformScale {
    fn invert(&self, sv: f32) -> f64 {
        let center = self.transform.frame().center();
        match self.axis {
            Axis::X => {
                self.transform
                    .value_from_position(Pos2::new(sv, center.y))
                    .x
            }
            Axis::Y => {
                self.transform
                    .value_from_position(Pos2::new(center.x, sv))
                    .y
            }
        }
    }
}

/// Build a [`PlotFrame`] from the transform of a finished plot: the data
/// frame rect plus x/y scales registered under
/// [`DEFAULT_RANGE`](crate::host::DEFAULT_RANGE).
pub fn frame_from_transform(transform: &PlotTransform) -> PlotFrame {
    PlotFrame::with_scales(
        *transform.frame(),
        Arc::new(TransformScale::x(*transform)),
        Arc::new(TransformScale::y(*transform)),
    )
}

/// Translate this frame's raw input into tool events: a released primary
/// click becomes a tap, a double click the finalizing gesture, and a
/// released Enter the cancel key event.
pub fn gather_events(response: &egui::Response, ctx: &egui::Context) -> Vec<ToolEvent> {
    let mut events = Vec::new();
    let modifiers: KeyModifiers = ctx.input(|i| i.modifiers).into();

    if let Some(pos) = response.interact_pointer_pos() {
        let tap = TapEvent {
            pos: ScreenPos { x: pos.x, y: pos.y },
            modifiers,
        };
        if response.double_clicked() {
            events.push(ToolEvent::DoubleTap(tap));
        } else if response.clicked() {
            events.push(ToolEvent::Tap(tap));
        }
    }

    if ctx.input(|i| i.key_released(egui::Key::Enter)) {
        events.push(ToolEvent::KeyUp(KeyEvent {
            key: egui::Key::Enter,
            modifiers,
        }));
    }

    events
}

/// Paint the overlay's current shapes with the given painter.
pub fn paint_overlay(painter: &egui::Painter, overlay: &PolyOverlay) {
    painter.extend(overlay.shapes());
}

/// Ready-made wiring of tool, activation handle and controller for hosts
/// built directly on egui_plot.
///
/// Call [`toolbar_button`](Self::toolbar_button) somewhere in the chrome and
/// [`integrate`](Self::integrate) right after `Plot::show` each frame.
pub struct PolySelectUi {
    tool: Arc<PolySelectTool>,
    activation: ToolActivation,
    controller: PolySelectController,
}

impl PolySelectUi {
    pub fn new(tool: PolySelectTool) -> Self {
        let tool = Arc::new(tool);
        let activation = ToolActivation::new();
        let controller = PolySelectController::with_activation(Arc::clone(&tool), &activation);
        Self {
            tool,
            activation,
            controller,
        }
    }

    pub fn tool(&self) -> &PolySelectTool {
        &self.tool
    }

    pub fn activation(&self) -> &ToolActivation {
        &self.activation
    }

    pub fn controller(&self) -> &PolySelectController {
        &self.controller
    }

    /// Toggle button for the tool, rendered with its icon and name.
    pub fn toolbar_button(&self, ui: &mut egui::Ui) {
        let active = self.activation.is_active();
        let response = ui
            .add(egui::Button::new(self.tool.icon).selected(active))
            .on_hover_text(self.tool.tool_name);
        if response.clicked() {
            self.activation.set_active(!active);
        }
    }

    /// Run one frame of lasso interaction against a finished plot.
    ///
    /// Polls the activation subscription, routes this frame's gestures to
    /// the controller while the tool is active, and paints the overlay
    /// clipped to the plot frame.
    pub fn integrate<R>(
        &mut self,
        ui: &egui::Ui,
        plot_response: &PlotResponse<R>,
        ctx: &mut SelectContext<'_>,
    ) {
        self.controller.poll_activation();

        let frame = frame_from_transform(&plot_response.transform);
        if self.activation.is_active() {
            for event in gather_events(&plot_response.response, ui.ctx()) {
                self.controller.handle(&event, &frame, ctx);
            }
        }

        let overlay = self.tool.overlay.lock().unwrap();
        let painter = ui.painter().with_clip_rect(frame.bbox);
        paint_overlay(&painter, &overlay);
    }
}
