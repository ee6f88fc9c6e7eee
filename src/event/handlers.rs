use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{CanvasEvent, EventHandler};

/// Logs the stroke count every time the committed history changes
#[derive(Debug, Default)]
pub struct HistoryLogger {
    strokes: usize,
}

impl HistoryLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for HistoryLogger {
    fn handle_event(&mut self, event: &CanvasEvent) {
        match event {
            CanvasEvent::StrokeCommitted { index, stroke } => {
                self.strokes = index + 1;
                log::debug!(
                    "strokes changed: {} ({} {}px \"{}\")",
                    self.strokes,
                    stroke.color().hex(),
                    stroke.width().pixels(),
                    stroke.path()
                );
            }
            CanvasEvent::StrokeUndone { remaining } => {
                self.strokes = *remaining;
                log::debug!("strokes changed: {} (undo)", self.strokes);
            }
            CanvasEvent::HistoryCleared => {
                self.strokes = 0;
                log::debug!("strokes changed: 0 (cleared)");
            }
            _ => {}
        }
    }
}

/// Keeps the most recent events in a shared buffer.
///
/// Clones share the same buffer, so one clone can be subscribed to the bus
/// while another is kept around for reading.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: Arc<Mutex<VecDeque<CanvasEvent>>>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Recorded events, oldest first
    pub fn events(&self) -> Vec<CanvasEvent> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &CanvasEvent) {
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(event.clone());
    }
}
