use crate::config::CanvasConfig;
use crate::event::{CanvasEvent, EventBus, EventHandler};
use crate::history::StrokeHistory;
use crate::input::InputEvent;
use crate::pen::{Color, PenSettings, StrokeWidth};
use crate::recorder::{Outcome, StrokeRecorder};
use crate::stroke::{RenderItem, Stroke};

/// Everything the drawing surface owns: committed strokes, the pen, and the
/// stroke currently being recorded.
///
/// All operations run synchronously on the UI thread; each one leaves the
/// state fully updated before returning.
#[derive(Debug, Default)]
pub struct DrawingState {
    history: StrokeHistory,
    pen: PenSettings,
    recorder: StrokeRecorder,
    event_bus: EventBus,
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self {
            history: StrokeHistory::with_limit(config.stroke_limit()),
            pen: config.initial_pen(),
            recorder: StrokeRecorder::new(),
            event_bus: EventBus::new(),
        }
    }

    /// Register a change-notification handler
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    /// Feed one pointer event to the recorder
    pub fn handle_input(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::PointerDown { position } => {
                // A press while recording restarts, dropping the old path
                if self.recorder.is_recording() {
                    self.event_bus.emit(CanvasEvent::StrokeAbandoned);
                }
                let outcome = self.recorder.begin(position);
                self.event_bus
                    .emit(CanvasEvent::StrokeStarted { at: position });
                outcome
            }
            InputEvent::PointerMove { position } => {
                let outcome = self.recorder.extend(position);
                if outcome.is_applied() {
                    let segments = self
                        .recorder
                        .current_encoding()
                        .map_or(0, |path| path.segment_count());
                    self.event_bus.emit(CanvasEvent::StrokeExtended { segments });
                }
                outcome
            }
            InputEvent::PointerUp => match self.commit_stroke() {
                Some(_) => Outcome::Applied,
                None => Outcome::Ignored,
            },
        }
    }

    /// Finish the in-progress stroke and append it to the history
    pub fn commit_stroke(&mut self) -> Option<&Stroke> {
        let stroke = self.recorder.commit(&self.pen)?;
        let index = self.history.append(stroke.clone());
        log::debug!("Committed stroke {}: {}", index, stroke.path());
        self.event_bus
            .emit(CanvasEvent::StrokeCommitted { index, stroke });
        self.history.snapshot().get(index)
    }

    pub fn select_color(&mut self, color: Color) -> Outcome {
        let old = self.pen.set_color(color);
        if old == color {
            return Outcome::Ignored;
        }
        log::info!("Color selected: {}", color.hex());
        self.event_bus.emit(CanvasEvent::ColorChanged { old, new: color });
        Outcome::Applied
    }

    pub fn select_width(&mut self, width: StrokeWidth) -> Outcome {
        let old = self.pen.set_width(width);
        if old == width {
            return Outcome::Ignored;
        }
        log::info!("Width selected: {}px", width.pixels());
        self.event_bus.emit(CanvasEvent::WidthChanged { old, new: width });
        Outcome::Applied
    }

    /// Remove the last committed stroke. An in-progress stroke is unaffected.
    pub fn undo(&mut self) -> Outcome {
        match self.history.undo() {
            Some(_) => {
                self.event_bus.emit(CanvasEvent::StrokeUndone {
                    remaining: self.history.len(),
                });
                Outcome::Applied
            }
            None => Outcome::Ignored,
        }
    }

    /// Empty the history and abandon any in-progress stroke without committing it
    pub fn clear(&mut self) -> Outcome {
        let abandoned = self.recorder.abandon();
        if abandoned.is_applied() {
            self.event_bus.emit(CanvasEvent::StrokeAbandoned);
        }

        let had_strokes = !self.history.is_empty();
        if had_strokes {
            self.history.clear();
            self.event_bus.emit(CanvasEvent::HistoryCleared);
            log::info!("Canvas cleared");
        }

        if had_strokes || abandoned.is_applied() {
            Outcome::Applied
        } else {
            Outcome::Ignored
        }
    }

    /// Committed strokes in draw order, followed by the live stroke if one is
    /// being recorded. The live stroke uses the current pen settings.
    pub fn render_frame(&self) -> Vec<RenderItem<'_>> {
        let mut items: Vec<RenderItem<'_>> =
            self.history.snapshot().iter().map(RenderItem::from).collect();
        if let Some(path) = self.recorder.current_encoding() {
            items.push(RenderItem {
                path,
                color: self.pen.color(),
                width: self.pen.width(),
                live: true,
            });
        }
        items
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn pen(&self) -> &PenSettings {
        &self.pen
    }

    pub fn recorder(&self) -> &StrokeRecorder {
        &self.recorder
    }
}
