//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod result;

use crate::app::App;
use crate::state::Page;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_backdrop(frame, main_area);

    if app.state.is_open {
        let inner = layout::draw_dialog_frame(frame, layout::dialog_area(main_area));
        match app.modal.page() {
            Page::Home => home::draw(frame, inner, app),
            page if page.is_form() => forms::draw(frame, inner, app),
            _ => result::draw(frame, inner, app),
        }
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog goes on top of everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
