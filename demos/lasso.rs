//! Demo: polygon lasso selection over a scatter chart.
//!
//! What it demonstrates
//! - Wiring `PolySelectUi` into an `egui_plot` chart with `integrate()`.
//! - A host-side selection executor (point-in-polygon over screen space),
//!   a history sink, and a data-space selection callback.
//!
//! How to run
//! ```bash
//! cargo run --example lasso
//! ```
//! Activate the lasso with the toolbar button, click to add vertices,
//! double-click to finish (hold shift to append to the selection), press
//! Enter to abandon the polygon.

use std::sync::Arc;

use eframe::egui;
use egui_plot::{Plot, PlotPoint, Points};

use lassoplot::{
    frame_from_transform, CallbackPayload, HistorySink, PolyGeometry, PolySelectTool,
    PolySelectUi, RendererScales, SelectContext, SelectionExecutor,
};

/// Even-odd ray cast over the screen-space polygon.
fn polygon_contains(xs: &[f32], ys: &[f32], p: egui::Pos2) -> bool {
    let n = xs.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (xs[i], ys[i]);
        let (xj, yj) = (xs[j], ys[j]);
        if (yi > p.y) != (yj > p.y) {
            let x_cross = xi + (p.y - yi) / (yj - yi) * (xj - xi);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Host-side selection pipeline for the scatter: hit-tests the screen
/// positions of the data points against the submitted polygon.
#[derive(Default)]
struct ScatterExecutor {
    screen_points: Vec<egui::Pos2>,
    selected: Vec<usize>,
    last_final: Option<PolyGeometry>,
}

impl SelectionExecutor for ScatterExecutor {
    fn select(&mut self, geometry: &PolyGeometry, is_final: bool, append: bool) {
        let hits: Vec<usize> = self
            .screen_points
            .iter()
            .enumerate()
            .filter(|(_, p)| polygon_contains(&geometry.sx, &geometry.sy, **p))
            .map(|(i, _)| i)
            .collect();
        if append {
            for i in hits {
                if !self.selected.contains(&i) {
                    self.selected.push(i);
                }
            }
            self.selected.sort_unstable();
        } else {
            self.selected = hits;
        }
        if is_final {
            self.last_final = Some(geometry.clone());
        }
    }

    fn current_selection(&self) -> serde_json::Value {
        serde_json::json!({ "indices": self.selected })
    }
}

/// Prints every pushed undo entry instead of storing it.
struct LogHistory;

impl HistorySink for LogHistory {
    fn push_state(&mut self, tag: &str, snapshot: serde_json::Value) {
        println!("history push: {tag} {snapshot}");
    }
}

struct ScatterRenderer;

impl RendererScales for ScatterRenderer {}

struct DemoApp {
    lasso: PolySelectUi,
    points: Vec<[f64; 2]>,
    executor: ScatterExecutor,
    history: LogHistory,
}

impl DemoApp {
    fn new() -> Self {
        let callback = Arc::new(
            |_tool: &PolySelectTool, payload: &CallbackPayload| {
                if let (Some(x), Some(y)) = (&payload.geometry.x, &payload.geometry.y) {
                    println!("lasso in data space: x={x:?} y={y:?}");
                }
            },
        );

        // Deterministic lissajous-ish scatter.
        let points = (0..240)
            .map(|i| {
                let t = i as f64 * 0.26;
                [
                    t.sin() * (1.0 + 0.010 * i as f64),
                    (1.3 * t).cos() * (1.0 + 0.008 * i as f64),
                ]
            })
            .collect();

        Self {
            lasso: PolySelectUi::new(PolySelectTool::new().with_callback(callback)),
            points,
            executor: ScatterExecutor::default(),
            history: LogHistory,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.lasso.toolbar_button(ui);
                ui.label("click: add vertex · double-click: select (shift appends) · Enter: cancel");
                ui.separator();
                ui.label(format!("{} selected", self.executor.selected.len()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut sel_pts: Vec<[f64; 2]> = Vec::new();
            let mut unsel_pts: Vec<[f64; 2]> = Vec::new();
            for (i, p) in self.points.iter().enumerate() {
                if self.executor.selected.contains(&i) {
                    sel_pts.push(*p);
                } else {
                    unsel_pts.push(*p);
                }
            }

            let response = Plot::new("scatter")
                .allow_scroll(false)
                .allow_double_click_reset(false)
                .show(ui, |plot_ui| {
                    plot_ui.points(
                        Points::new("points", unsel_pts)
                            .radius(2.5)
                            .color(egui::Color32::from_rgb(31, 119, 180)),
                    );
                    plot_ui.points(
                        Points::new("selected", sel_pts)
                            .radius(3.5)
                            .color(egui::Color32::from_rgb(214, 39, 40)),
                    );
                });

            // Refresh the executor's screen-space view of the data before
            // routing this frame's gestures.
            self.executor.screen_points = self
                .points
                .iter()
                .map(|&[x, y]| response.transform.position_from_point(&PlotPoint::new(x, y)))
                .collect();

            self.lasso.integrate(
                ui,
                &response,
                &mut SelectContext {
                    executor: &mut self.executor,
                    history: &mut self.history,
                },
            );

            // Base selection logic: after a finalized non-empty selection,
            // hand the enriched geometry to the tool's callback.
            if let Some(geometry) = self.executor.last_final.take() {
                if !self.executor.selected.is_empty() {
                    let frame = frame_from_transform(&response.transform);
                    self.lasso
                        .controller()
                        .emit_callback(&geometry, &frame, &[&ScatterRenderer]);
                }
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(900.0, 700.0)),
        ..Default::default()
    };
    eframe::run_native(
        "lassoplot demo",
        options,
        Box::new(|cc| {
            // Install Phosphor icon font so the toolbar button renders.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(DemoApp::new()))
        }),
    )
}
