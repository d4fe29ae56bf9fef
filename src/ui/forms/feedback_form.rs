//! Form page: email, optional text and the Submit/Back buttons

use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::LINK_SHORTCUT;
use crate::state::{FeedbackForm, FormButton, FormFocus};
use crate::ui::components::{render_button, wrap_text, BUTTON_HEIGHT, EXTERNAL_MARKER};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(form), Some(copy)) = (
        app.state.form.as_ref(),
        app.messages.form_copy(app.modal.page()),
    ) else {
        return;
    };

    let description = copy.description.as_deref().unwrap_or_default();
    // Only offered when the host configured a URL behind it
    let link_label = copy
        .link_label
        .as_deref()
        .filter(|_| app.modal.description_link().is_some());
    let description_height = if description.is_empty() {
        0
    } else {
        wrap_text(description, area.width as usize).len() as u16
            + u16::from(link_label.is_some())
            + 1
    };
    let text_height = if form.text.is_some() { 6 } else { 0 };

    let [title_area, description_area, email_area, text_area, note_area, buttons_area, sending_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(description_height),
            Constraint::Length(3),
            Constraint::Min(text_height),
            Constraint::Length(2),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            copy.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))),
        title_area,
    );

    if !description.is_empty() {
        let mut lines = vec![Line::from(description)];
        if let Some(label) = link_label {
            lines.push(Line::from(vec![
                Span::styled(LINK_SHORTCUT, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" {label} {EXTERNAL_MARKER}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            description_area,
        );
    }

    let focus = form.focus();
    draw_field(frame, email_area, &form.email, focus == FormFocus::Email);
    if let Some(text) = &form.text {
        draw_field(frame, text_area, text, focus == FormFocus::Text);
    }

    frame.render_widget(
        Paragraph::new(copy.note.as_str())
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true }),
        note_area,
    );

    draw_buttons(
        frame,
        buttons_area,
        form,
        &copy.submit,
        &app.messages.back,
        app.modal.is_submitting(),
    );

    if app.modal.is_submitting() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                app.messages.sending.as_str(),
                Style::default().fg(Color::Yellow),
            )),
            sending_area,
        );
    }
}

fn draw_buttons(
    frame: &mut Frame,
    area: Rect,
    form: &FeedbackForm,
    submit_label: &str,
    back_label: &str,
    is_submitting: bool,
) {
    let submit_width = submit_label.chars().count() as u16 + 4;
    let back_width = back_label.chars().count() as u16 + 4;
    let [submit_area, _, back_area, _] = Layout::horizontal([
        Constraint::Length(submit_width),
        Constraint::Length(1),
        Constraint::Length(back_width),
        Constraint::Min(0),
    ])
    .areas(area);

    let on_buttons = form.is_buttons_row_active();
    render_button(
        frame,
        submit_area,
        submit_label,
        on_buttons && form.selected_button == FormButton::Submit,
        !is_submitting,
    );
    render_button(
        frame,
        back_area,
        back_label,
        on_buttons && form.selected_button == FormButton::Back,
        true,
    );
}
