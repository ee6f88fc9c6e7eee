mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::CanvasEvent;
pub use handlers::{EventLog, HistoryLogger};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &CanvasEvent);
}
