//! Screen layout: backdrop, dialog frame and status bar

use super::components::centered_rect;
use crate::app::App;
use crate::platform::{LINK_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Page;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Largest dialog size; smaller terminals shrink it
const DIALOG_WIDTH: u16 = 76;
const DIALOG_HEIGHT: u16 = 28;

/// Split the screen into the main area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let [main, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (main, status)
}

/// Area taken by the dialog inside the main area
pub fn dialog_area(main_area: Rect) -> Rect {
    centered_rect(main_area, DIALOG_WIDTH, DIALOG_HEIGHT)
}

/// Draw the screen behind the dialog
pub fn draw_backdrop(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Feedback",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("f", Style::default().fg(Color::Cyan)),
            Span::styled(" share feedback  ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let backdrop = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(backdrop, area);
}

/// Clear the dialog area and draw its frame; returns the inner area
pub fn draw_dialog_frame(frame: &mut Frame, area: Rect) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Feedback ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Key hints for the current page
pub fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if !app.state.is_open {
        return vec![("f", "open"), ("q", "quit")];
    }
    match app.modal.page() {
        Page::Home => vec![("↑↓", "select"), ("Enter", "choose"), ("Esc", "cancel")],
        page if page.is_form() => {
            let mut hints = vec![("Tab", "next field"), (SUBMIT_SHORTCUT, "submit")];
            if app.modal.description_link().is_some() {
                hints.push((LINK_SHORTCUT, "open link"));
            }
            hints.push(("Esc", "back"));
            hints
        }
        _ => vec![("Enter", "close"), ("Esc", "close")],
    }
}

/// Draw the status bar: a status message if there is one, key hints otherwise
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        )),
        None => {
            let mut spans = vec![Span::raw(" ")];
            for (key, label) in key_hints(app) {
                spans.push(Span::styled(key, Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(
                    format!(" {label}  "),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main, Rect::new(0, 0, 80, 23));
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_dialog_area_fits_small_terminal() {
        let main = Rect::new(0, 0, 60, 20);
        assert_eq!(dialog_area(main), main);
    }

    #[test]
    fn test_dialog_area_is_centered_on_large_terminal() {
        let area = dialog_area(Rect::new(0, 0, 120, 40));
        assert_eq!(area, Rect::new(22, 6, DIALOG_WIDTH, DIALOG_HEIGHT));
    }
}
