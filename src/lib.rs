//! lassoplot crate root: re-exports and module wiring.
//!
//! A polygon lasso selection tool for egui_plot charts: single taps build a
//! polygon, a live overlay previews it, a double tap submits it to the
//! host's selection pipeline (Enter cancels).  The cohesive modules:
//! - `geometry`: coordinate types and the tagged selection request
//! - `events`: the structured gesture/key event union
//! - `overlay`: the preview shape and its styling
//! - `host`: collaborator traits the host plotting framework implements
//! - `tool`: tool configuration and the activation handle
//! - `controller`: the per-plot interaction controller
//! - `plot_link`: egui_plot adapter and ready-made UI wiring
//! - `persistence`: JSON save/load of tool options

pub mod controller;
pub mod events;
pub mod geometry;
pub mod host;
pub mod overlay;
pub mod persistence;
pub mod plot_link;
pub mod tool;

// Public re-exports for a compact external API
pub use controller::{PolySelectController, PolyVertices, HISTORY_TAG};
pub use events::{Gesture, KeyEvent, KeyModifiers, TapEvent, ToolEvent};
pub use geometry::{DataPos, GeometryKind, PolyGeometry, ScreenPos};
pub use host::{
    CallbackPayload, DataScale, HistorySink, PlotFrame, RendererScales, SelectContext,
    SelectionCallback, SelectionExecutor, DEFAULT_RANGE,
};
pub use overlay::{OverlayStyle, PolyOverlay};
pub use plot_link::{frame_from_transform, gather_events, paint_overlay, PolySelectUi, TransformScale};
pub use tool::{properties, PolySelectTool, PropertyDef, ToolActivation};
