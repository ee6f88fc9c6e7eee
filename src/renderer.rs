// src/renderer.rs
use eframe::egui::{self, Color32, Pos2, Rect, Shape};

use crate::stroke::RenderItem;

/// Paints render frames onto an egui painter.
///
/// Strokes are outline-only with round caps and joins: each path is drawn as
/// a polyline plus a filled disc of the stroke's radius on every vertex.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    corner_radius: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            corner_radius: 10.0,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the canvas background and every stroke in the frame, in order
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas rectangle, strokes are offset by its origin
    ///     items: Committed strokes followed by the live stroke, if any
    pub fn render(&self, painter: &egui::Painter, rect: Rect, items: &[RenderItem<'_>]) {
        painter.rect_filled(rect, self.corner_radius, self.background);

        let clipped = painter.with_clip_rect(rect);
        for item in items {
            clipped.extend(Self::stroke_shapes(rect.min, item));
        }
    }

    /// Shapes for a single stroke, translated from canvas-local to screen coordinates
    pub fn stroke_shapes(origin: Pos2, item: &RenderItem<'_>) -> Vec<Shape> {
        let color = item.color.to_color32();
        let width = item.width.pixels() as f32;
        let radius = width / 2.0;

        let points: Vec<Pos2> = item
            .path
            .points()
            .iter()
            .map(|p| origin + p.to_vec2())
            .collect();

        let mut shapes = Vec::with_capacity(points.len() + 1);
        if points.len() > 1 {
            shapes.push(Shape::line(points.clone(), egui::Stroke::new(width, color)));
        }
        shapes.extend(
            points
                .into_iter()
                .map(|center| Shape::circle_filled(center, radius, color)),
        );
        shapes
    }

    pub fn background(&self) -> Color32 {
        self.background
    }
}
