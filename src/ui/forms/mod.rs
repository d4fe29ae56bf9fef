//! Form rendering

mod feedback_form;
mod field_renderer;

pub use feedback_form::draw;
