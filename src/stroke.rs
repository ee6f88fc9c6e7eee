use serde::{Deserialize, Serialize};

use crate::path::PathEncoding;
use crate::pen::{Color, PenSettings, StrokeWidth};

/// A committed freehand stroke. Never changes once it is in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    path: PathEncoding,
    color: Color,
    width: StrokeWidth,
}

impl Stroke {
    pub fn new(path: PathEncoding, color: Color, width: StrokeWidth) -> Self {
        Self { path, color, width }
    }

    /// Package a finished path with the given pen settings
    pub fn with_pen(path: PathEncoding, pen: &PenSettings) -> Self {
        Self::new(path, pen.color(), pen.width())
    }

    pub fn path(&self) -> &PathEncoding {
        &self.path
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> StrokeWidth {
        self.width
    }
}

/// One entry handed to the rendering surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem<'a> {
    pub path: &'a PathEncoding,
    pub color: Color,
    pub width: StrokeWidth,
    /// The in-progress stroke, drawn on top of the committed ones
    pub live: bool,
}

impl<'a> From<&'a Stroke> for RenderItem<'a> {
    fn from(stroke: &'a Stroke) -> Self {
        Self {
            path: &stroke.path,
            color: stroke.color,
            width: stroke.width,
            live: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn stroke_serializes_for_external_renderers() {
        let mut path = PathEncoding::start(Pos2::new(1.0, 1.0));
        path.line_to(Pos2::new(2.0, 3.0));
        let stroke = Stroke::new(path, Color::Blue, StrokeWidth::Medium);

        let json = serde_json::to_value(&stroke).unwrap();
        assert_eq!(json["path"], "M1,1 L2,3");
        assert_eq!(json["color"], "#0000FF");
        assert_eq!(json["width"], 5);

        let back: Stroke = serde_json::from_value(json).unwrap();
        assert_eq!(back, stroke);
    }

    #[test]
    fn stroke_with_malformed_path_is_rejected() {
        let json = r##"{"path":"L1,1","color":"#FF0000","width":3}"##;
        assert!(serde_json::from_str::<Stroke>(json).is_err());
    }

    #[test]
    fn red_stroke_matches_renderer_wire_form() {
        let stroke = Stroke::new(
            PathEncoding::start(Pos2::new(10.0, 10.0)),
            Color::Red,
            StrokeWidth::Medium,
        );
        assert_eq!(
            serde_json::to_string(&stroke).unwrap(),
            r##"{"path":"M10,10","color":"#FF0000","width":5}"##
        );
    }
}
