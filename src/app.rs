//! Terminal host around the feedback dialog

use crate::messages::Messages;
use crate::platform::SEND_MODIFIER;
use crate::state::{
    AppState, FeedbackForm, FeedbackModal, Form, FormButton, FormFocus, HomeOutcome, Page,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Host-side state: visibility, selection, form contents, errors
    pub state: AppState,
    /// Page controller
    pub modal: FeedbackModal,
    /// UI text
    pub messages: Messages,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(modal: FeedbackModal, messages: Messages) -> Self {
        Self {
            state: AppState::default(),
            modal,
            messages,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn open_dialog(&mut self) {
        self.state.is_open = true;
        self.state.status_message = None;
        self.modal.open();
        self.sync_form();
    }

    pub fn close_dialog(&mut self) {
        self.modal.close();
        self.state.is_open = false;
        self.state.home_selected = 0;
        self.state.form = None;
    }

    /// Apply settled submissions. Returns true if the page changed.
    pub fn poll_submissions(&mut self) -> bool {
        let changed = self.modal.poll_outcomes();
        if changed {
            self.sync_form();
        }
        changed
    }

    /// Keep the edited form in step with the controller's page
    fn sync_form(&mut self) {
        let page = self.modal.page();
        if !page.is_form() {
            self.state.form = None;
            return;
        }
        if self.state.form.as_ref().map(|form| form.page) != Some(page) {
            self.state.form = Some(FeedbackForm::for_page(
                page,
                self.modal.email(),
                &self.messages,
            ));
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if !self.state.is_open {
            match key.code {
                KeyCode::Char('f') => self.open_dialog(),
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            }
            return Ok(());
        }

        self.state.status_message = None;

        match self.modal.page() {
            Page::Home => self.handle_home_key(key),
            page if page.is_form() => self.handle_form_key(key),
            _ => self.handle_result_key(key),
        }

        self.sync_form();
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let offered = self.modal.offered_actions();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(offered.len()),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(offered.len()),
            KeyCode::Enter => {
                let Some(&action) = offered.get(self.state.home_selected) else {
                    return;
                };
                match self.modal.select_home_action(action) {
                    Ok(HomeOutcome::OpenedLink(url)) => {
                        self.state.status_message = Some(format!("Opened {url}"));
                    }
                    Ok(HomeOutcome::Navigated(_)) => {}
                    Err(err) => self.push_error(err.to_string()),
                }
            }
            KeyCode::Esc => self.close_dialog(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.open_description_link();
            }
            KeyCode::Enter if key.modifiers.contains(SEND_MODIFIER) => self.submit(),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left | KeyCode::Right if form.is_buttons_row_active() => {
                form.selected_button.toggle();
            }
            KeyCode::Enter => match form.focus() {
                FormFocus::Buttons => match form.selected_button {
                    FormButton::Submit => self.submit(),
                    FormButton::Back => self.back(),
                },
                FormFocus::Text => form.newline(),
                FormFocus::Email => form.next_field(),
            },
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                form.input_char(c);
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.close_dialog();
        }
    }

    fn back(&mut self) {
        if let Err(err) = self.modal.click_back() {
            self.push_error(err.to_string());
        }
    }

    fn open_description_link(&mut self) {
        match self.modal.open_description_link() {
            Ok(url) => self.state.status_message = Some(format!("Opened {url}")),
            Err(err) => self.push_error(err.to_string()),
        }
    }

    fn submit(&mut self) {
        let Some(form) = self.state.form.as_ref() else {
            return;
        };
        let email = form.email_value().to_string();
        let text = form.text_value().to_string();
        if let Err(err) = self.modal.submit_form(&email, &text) {
            self.push_error(err.to_string());
        }
    }
}
