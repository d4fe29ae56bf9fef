//! Success and error pages

use crate::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(copy) = app.messages.result_copy(app.modal.page()) else {
        return;
    };

    let (symbol, color) = if copy.is_error {
        ("✗", Color::Red)
    } else {
        ("✓", Color::Green)
    };

    let [_, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let body = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{symbol} "), Style::default().fg(color)),
            Span::styled(
                copy.title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            copy.description,
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(body, body_area);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" {}", app.messages.close),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(footer, footer_area);
}
