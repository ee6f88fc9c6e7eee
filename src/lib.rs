#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod history;
pub mod input;
pub mod panels;
pub mod path;
pub mod pen;
pub mod recorder;
pub mod renderer;
pub mod state;
pub mod stroke;

pub use app::CanvasApp;
pub use config::CanvasConfig;
pub use error::{ConfigError, PathParseError, PenParseError};
pub use event::{CanvasEvent, EventBus, EventHandler};
pub use history::StrokeHistory;
pub use input::{InputEvent, InputHandler};
pub use path::PathEncoding;
pub use pen::{Color, PenSettings, StrokeWidth};
pub use recorder::{Outcome, StrokeRecorder};
pub use renderer::Renderer;
pub use state::DrawingState;
pub use stroke::{RenderItem, Stroke};
