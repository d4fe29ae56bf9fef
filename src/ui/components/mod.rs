//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_card, BUTTON_HEIGHT, CARD_HEIGHT, EXTERNAL_MARKER};
pub use dialog::{centered_rect, render_error_dialog, wrap_text};
