//! Coordinate value types and the polygon selection-geometry request.
//!
//! Two coordinate spaces are involved: *screen space* (pixels on the
//! rendered chart, `f32` like the rest of egui) and *data space* (domain
//! coordinates defined by the plot axes, `f64`).  The lasso accumulates
//! screen-space vertices; data-space coordinates are only computed on the
//! callback path by inverting the polygon through the renderer's scales.

use serde::{Deserialize, Serialize};

/// Screen (pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

/// Data-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPos {
    pub x: f64,
    pub y: f64,
}

/// Discriminator tag carried by a selection-geometry request.
///
/// Only polygons exist in this crate; the tag is kept explicit so the
/// serialized request stays self-describing for host selection pipelines
/// that accept several geometry shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeometryKind {
    #[default]
    #[serde(rename = "polygon")]
    Polygon,
}

/// A selection-geometry request: the tagged polygon submitted to the host
/// selection pipeline to determine which rendered data is selected.
///
/// `sx`/`sy` are parallel screen-space vertex sequences in insertion order.
/// `x`/`y` are the optional data-space enrichment, present only on requests
/// delivered to a [`SelectionCallback`](crate::host::SelectionCallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyGeometry {
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    pub sx: Vec<f32>,
    pub sy: Vec<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
}

impl PolyGeometry {
    /// Build a screen-space polygon request from copied vertex sequences.
    pub fn new(sx: Vec<f32>, sy: Vec<f32>) -> Self {
        debug_assert_eq!(sx.len(), sy.len());
        Self {
            kind: GeometryKind::Polygon,
            sx,
            sy,
            x: None,
            y: None,
        }
    }

    /// Number of vertices. Degenerate polygons (zero, one or two vertices)
    /// are representable; interpreting them is the selection pipeline's job.
    pub fn vertex_count(&self) -> usize {
        self.sx.len()
    }

    /// Merge data-space coordinates into a copy of this request.
    pub fn with_data_space(mut self, x: Vec<f64>, y: Vec<f64>) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }
}
