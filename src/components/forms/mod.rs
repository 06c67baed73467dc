//! Form components for the Home Value GUI
//!
//! Provides the range slider used by the prediction form and the text
//! input used by the contact form.

mod slider;
mod text_input;

pub use slider::*;
pub use text_input::*;
