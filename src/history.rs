use std::num::NonZeroUsize;

use crate::stroke::Stroke;

/// Ordered list of committed strokes. Insertion order is both draw order
/// and undo order.
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
    /// Oldest strokes are evicted past this many entries. `None` keeps everything.
    limit: Option<NonZeroUsize>,
}

impl StrokeHistory {
    /// Creates a new, unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<NonZeroUsize>) -> Self {
        Self {
            strokes: Vec::new(),
            limit,
        }
    }

    /// Add a stroke on top. Returns its index.
    pub fn append(&mut self, stroke: Stroke) -> usize {
        self.strokes.push(stroke);
        if let Some(limit) = self.limit.map(NonZeroUsize::get) {
            if self.strokes.len() > limit {
                let excess = self.strokes.len() - limit;
                self.strokes.drain(..excess);
                log::debug!("Evicted {} oldest stroke(s), limit is {}", excess, limit);
            }
        }
        self.strokes.len() - 1
    }

    /// Remove the most recent stroke, if any
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Committed strokes in draw order
    pub fn snapshot(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }
}
