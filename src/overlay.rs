//! Preview overlay for an in-progress polygon selection.
//!
//! The overlay is a retained shape: the controller pushes copied vertex
//! sequences into it whenever the lasso changes and blanks it by pushing
//! empty sequences.  Vertices are screen-space pixels; the shape is painted
//! on top of the chart, after the plot itself.

use eframe::egui::{self, Color32, Pos2, Stroke};

/// Visual styling for the polygon overlay.
///
/// The default matches the classic lasso look: light grey fill at 50%
/// opacity with a 2 px black outline dashed 4-on/4-off.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub fill: Color32,
    pub line: Stroke,
    /// Dash pattern for the outline: `[on, off]` lengths in pixels.
    pub dash: [f32; 2],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            fill: Color32::from_rgba_unmultiplied(211, 211, 211, 128),
            line: Stroke::new(2.0, Color32::BLACK),
            dash: [4.0, 4.0],
        }
    }
}

/// The overlay shape: copied vertex lists plus a style record.
#[derive(Debug, Clone, Default)]
pub struct PolyOverlay {
    xs: Vec<f32>,
    ys: Vec<f32>,
    pub style: OverlayStyle,
}

impl PolyOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: OverlayStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Replace the overlay vertices with independent copies of the given
    /// sequences.  Empty sequences hide the overlay.
    pub fn update(&mut self, xs: &[f32], ys: &[f32]) {
        debug_assert_eq!(xs.len(), ys.len());
        self.xs = xs.to_vec();
        self.ys = ys.to_vec();
    }

    /// Blank the overlay (equivalent to `update(&[], &[])`).
    pub fn clear(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }

    pub fn xs(&self) -> &[f32] {
        &self.xs
    }

    pub fn ys(&self) -> &[f32] {
        &self.ys
    }

    /// `true` when the overlay holds no vertices and draws nothing.
    pub fn is_blank(&self) -> bool {
        self.xs.is_empty()
    }

    /// Produce the egui shapes for the current vertices: a translucent fill
    /// (three or more vertices) and a dashed closed outline (two or more).
    /// Fewer vertices produce no shapes.
    pub fn shapes(&self) -> Vec<egui::Shape> {
        let n = self.xs.len();
        if n < 2 {
            return Vec::new();
        }
        let points: Vec<Pos2> = self
            .xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Pos2::new(x, y))
            .collect();

        let mut shapes = Vec::new();
        if n >= 3 {
            shapes.push(egui::Shape::convex_polygon(
                points.clone(),
                self.style.fill,
                Stroke::NONE,
            ));
        }
        // Close the outline back to the first vertex.
        let mut outline = points;
        outline.push(outline[0]);
        shapes.extend(egui::Shape::dashed_line(
            &outline,
            self.style.line,
            self.style.dash[0],
            self.style.dash[1],
        ));
        shapes
    }
}
