//! Form state for the feedback sub-forms

use super::field::FormField;
use crate::messages::Messages;
use crate::state::Page;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Buttons at the bottom of every form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Back,
}

impl FormButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Back,
            Self::Back => Self::Submit,
        };
    }
}

/// What has focus inside a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Email,
    Text,
    Buttons,
}

/// The form being filled in on a sub-form page
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    pub page: Page,
    pub email: FormField,
    /// Absent on the mailing-list form
    pub text: Option<FormField>,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl FeedbackForm {
    /// Build the form for a page, pre-filled with the remembered email
    pub fn for_page(page: Page, email: &str, messages: &Messages) -> Self {
        let text = messages
            .form_copy(page)
            .and_then(|copy| copy.text_label)
            .map(|label| FormField::text("text", &label, true));
        Self {
            page,
            email: FormField::text_with_value("email", &messages.email, email.to_string(), false),
            text,
            active_field_index: 0,
            selected_button: FormButton::default(),
        }
    }

    pub fn focus(&self) -> FormFocus {
        match (self.active_field_index, self.text.is_some()) {
            (0, _) => FormFocus::Email,
            (1, true) => FormFocus::Text,
            _ => FormFocus::Buttons,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.focus() == FormFocus::Buttons
    }

    pub fn email_value(&self) -> &str {
        self.email.as_text()
    }

    pub fn text_value(&self) -> &str {
        self.text.as_ref().map(FormField::as_text).unwrap_or_default()
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    pub fn newline(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_newline();
        }
    }
}

impl Form for FeedbackForm {
    fn field_count(&self) -> usize {
        // email, [text], buttons
        if self.text.is_some() {
            3
        } else {
            2
        }
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Text => self.text.as_mut(),
            FormFocus::Buttons => None,
        }
    }
}
