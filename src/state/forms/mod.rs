//! Form domain layer
//!
//! Type-safe state for the email/text sub-forms.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{FeedbackForm, Form, FormButton, FormFocus};
