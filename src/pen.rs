use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::PenParseError;

/// The fixed drawing palette. Serialized as its hex string, e.g. `"#FF0000"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Color {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    Orange,
}

impl Color {
    /// Palette order, as offered by the color picker
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Orange,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            Color::Black => "#000000",
            Color::Red => "#FF0000",
            Color::Green => "#00FF00",
            Color::Blue => "#0000FF",
            Color::Yellow => "#FFFF00",
            Color::Magenta => "#FF00FF",
            Color::Cyan => "#00FFFF",
            Color::Orange => "#FFA500",
        }
    }

    /// Case-insensitive lookup by hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.hex().eq_ignore_ascii_case(hex))
    }

    pub fn to_color32(self) -> Color32 {
        match self {
            Color::Black => Color32::from_rgb(0x00, 0x00, 0x00),
            Color::Red => Color32::from_rgb(0xFF, 0x00, 0x00),
            Color::Green => Color32::from_rgb(0x00, 0xFF, 0x00),
            Color::Blue => Color32::from_rgb(0x00, 0x00, 0xFF),
            Color::Yellow => Color32::from_rgb(0xFF, 0xFF, 0x00),
            Color::Magenta => Color32::from_rgb(0xFF, 0x00, 0xFF),
            Color::Cyan => Color32::from_rgb(0x00, 0xFF, 0xFF),
            Color::Orange => Color32::from_rgb(0xFF, 0xA5, 0x00),
        }
    }
}

/// The fixed set of stroke thicknesses. Serialized as the pixel count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum StrokeWidth {
    Hairline,
    #[default]
    Thin,
    Medium,
    Thick,
    Heavy,
}

impl StrokeWidth {
    pub const ALL: [StrokeWidth; 5] = [
        StrokeWidth::Hairline,
        StrokeWidth::Thin,
        StrokeWidth::Medium,
        StrokeWidth::Thick,
        StrokeWidth::Heavy,
    ];

    pub fn pixels(self) -> u32 {
        match self {
            StrokeWidth::Hairline => 1,
            StrokeWidth::Thin => 3,
            StrokeWidth::Medium => 5,
            StrokeWidth::Thick => 8,
            StrokeWidth::Heavy => 12,
        }
    }

    /// Looks up the width with the given pixel size, if it is one of the offered sizes
    pub fn from_pixels(pixels: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.pixels() == pixels)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex().to_owned()
    }
}

impl TryFrom<String> for Color {
    type Error = PenParseError;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Color::from_hex(&hex).ok_or(PenParseError::UnknownColor(hex))
    }
}

impl From<StrokeWidth> for u32 {
    fn from(width: StrokeWidth) -> Self {
        width.pixels()
    }
}

impl TryFrom<u32> for StrokeWidth {
    type Error = PenParseError;

    fn try_from(pixels: u32) -> Result<Self, Self::Error> {
        StrokeWidth::from_pixels(pixels).ok_or(PenParseError::UnsupportedWidth(pixels))
    }
}

/// Active pen settings, applied to the next stroke that gets committed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenSettings {
    color: Color,
    width: StrokeWidth,
}

impl PenSettings {
    pub fn new(color: Color, width: StrokeWidth) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> StrokeWidth {
        self.width
    }

    /// Returns the previous color
    pub fn set_color(&mut self, color: Color) -> Color {
        std::mem::replace(&mut self.color, color)
    }

    /// Returns the previous width
    pub fn set_width(&mut self, width: StrokeWidth) -> StrokeWidth {
        std::mem::replace(&mut self.width, width)
    }

    /// Diameter of the width preview dot shown in the picker
    pub fn preview_diameter(width: StrokeWidth) -> f32 {
        (width.pixels() * 2) as f32
    }
}
