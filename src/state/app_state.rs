//! Host-side state around the feedback dialog

use super::forms::FeedbackForm;
use std::collections::VecDeque;

/// State owned by the terminal host rather than the page controller
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Whether the dialog is visible
    pub is_open: bool,
    /// Highlighted card on the home page (index into the offered actions)
    pub home_selected: usize,
    /// Form being edited while a sub-form page is shown
    pub form: Option<FeedbackForm>,
    /// One-line message shown in the status bar
    pub status_message: Option<String>,
    /// Errors waiting to be shown, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    /// Move the home selection down, wrapping around
    pub fn select_next(&mut self, count: usize) {
        if count > 0 {
            self.home_selected = (self.home_selected + 1) % count;
        }
    }

    /// Move the home selection up, wrapping around
    pub fn select_prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        if self.home_selected == 0 {
            self.home_selected = count - 1;
        } else {
            self.home_selected -= 1;
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed_without_form() {
        let state = AppState::default();
        assert!(!state.is_open);
        assert!(state.form.is_none());
        assert!(!state.has_errors());
    }

    #[test]
    fn test_select_next_wraps() {
        let mut state = AppState::default();
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.home_selected, 0);
    }

    #[test]
    fn test_select_prev_wraps() {
        let mut state = AppState::default();
        state.select_prev(4);
        assert_eq!(state.home_selected, 3);
    }

    #[test]
    fn test_select_with_no_items_is_noop() {
        let mut state = AppState::default();
        state.select_next(0);
        state.select_prev(0);
        assert_eq!(state.home_selected, 0);
    }

    #[test]
    fn test_errors_are_shown_oldest_first() {
        let mut state = AppState::default();
        state.push_error("first".into());
        state.push_error("second".into());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }
}
