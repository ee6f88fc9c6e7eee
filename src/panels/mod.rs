mod central_panel;
mod header_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use header_panel::header_panel;
pub use tools_panel::tools_panel;
