mod color_swatch;
mod width_button;

pub use color_swatch::ColorSwatch;
pub use width_button::WidthButton;
