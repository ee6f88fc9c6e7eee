use crate::config::CanvasConfig;
use crate::event::{CanvasEvent, EventLog, HistoryLogger};
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::DrawingState;

/// Number of recent events kept for the event log window
const EVENT_LOG_CAPACITY: usize = 64;

/// The drawing app shell. The drawing itself lives only in memory and is gone
/// when the app closes.
#[derive(Debug)]
pub struct CanvasApp {
    config: CanvasConfig,
    state: DrawingState,
    renderer: Renderer,
    input: InputHandler,
    event_log: EventLog,
    show_event_log: bool,
}

impl Default for CanvasApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        let state = DrawingState::from_config(&config);
        if config.log_history_changes {
            state.subscribe(Box::new(HistoryLogger::new()));
        }
        let event_log = EventLog::new(EVENT_LOG_CAPACITY);
        state.subscribe(Box::new(event_log.clone()));

        Self {
            config,
            state,
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
            event_log,
            show_event_log: false,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DrawingState {
        &mut self.state
    }

    pub fn show_event_log_mut(&mut self) -> &mut bool {
        &mut self.show_event_log
    }

    pub fn recent_events(&self) -> Vec<CanvasEvent> {
        self.event_log.events()
    }

    /// Translate this frame's pointer input and feed it to the drawing state
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            let outcome = self.state.handle_input(event);
            log::trace!("{:?} -> {:?}", event, outcome);
        }
    }

    pub fn render_canvas(&self, painter: &egui::Painter, rect: egui::Rect) {
        let frame = self.state.render_frame();
        self.renderer.render(painter, rect, &frame);
    }

    fn event_log_window(&mut self, ctx: &egui::Context) {
        let events = self.event_log.events();
        egui::Window::new("Event Log")
            .open(&mut self.show_event_log)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for event in &events {
                            ui.monospace(format!("{:?}", event));
                        }
                    });
            });
    }
}

impl eframe::App for CanvasApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::header_panel(self, ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        if self.show_event_log {
            self.event_log_window(ctx);
        }
    }
}
