use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pen::{Color, PenSettings, StrokeWidth};

/// Startup settings for the canvas app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to their defaults
pub struct CanvasConfig {
    /// Window title and header text
    pub title: String,
    /// Share of the available height taken by the drawing area
    pub canvas_height_fraction: f32,
    pub initial_color: Color,
    pub initial_width: StrokeWidth,
    /// Cap on committed strokes. `None` keeps every stroke for the session.
    pub history_limit: Option<usize>,
    /// Subscribe a `HistoryLogger` at startup
    pub log_history_changes: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            title: "Drawing App".to_owned(),
            canvas_height_fraction: 0.6,
            initial_color: Color::Black,
            initial_width: StrokeWidth::Thin,
            history_limit: None,
            log_history_changes: true,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fraction = self.canvas_height_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ConfigError::InvalidHeightFraction(fraction));
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        Ok(())
    }

    /// The configured stroke cap. A limit of zero can't hold any stroke, so
    /// it is treated as no limit.
    pub fn stroke_limit(&self) -> Option<NonZeroUsize> {
        match self.history_limit {
            Some(0) => {
                log::warn!("history_limit of 0 ignored, keeping every stroke");
                None
            }
            limit => limit.and_then(NonZeroUsize::new),
        }
    }

    pub fn initial_pen(&self) -> PenSettings {
        PenSettings::new(self.initial_color, self.initial_width)
    }
}
