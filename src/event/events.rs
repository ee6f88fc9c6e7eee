use egui::Pos2;

use crate::pen::{Color, StrokeWidth};
use crate::stroke::Stroke;

/// Notifications emitted by `DrawingState` whenever it actually changes
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    StrokeStarted {
        at: Pos2,
    },
    StrokeExtended {
        segments: usize,
    },
    StrokeCommitted {
        index: usize,
        stroke: Stroke,
    },
    /// An in-progress stroke was discarded without being committed
    StrokeAbandoned,
    StrokeUndone {
        remaining: usize,
    },
    HistoryCleared,
    ColorChanged {
        old: Color,
        new: Color,
    },
    WidthChanged {
        old: StrokeWidth,
        new: StrokeWidth,
    },
}

impl CanvasEvent {
    /// True for events that change the committed stroke list
    pub fn changes_history(&self) -> bool {
        matches!(
            self,
            CanvasEvent::StrokeCommitted { .. }
                | CanvasEvent::StrokeUndone { .. }
                | CanvasEvent::HistoryCleared
        )
    }
}
