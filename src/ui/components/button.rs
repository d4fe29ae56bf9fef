//! Button and card components for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Card height in rows (borders + two lines of description)
pub const CARD_HEIGHT: u16 = 4;

/// Marker appended to actions that open in the browser
pub const EXTERNAL_MARKER: &str = "↗";

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Card title, with the external marker when the action leaves the dialog
pub fn card_title(title: &str, is_external: bool) -> String {
    if is_external {
        format!(" {title} {EXTERNAL_MARKER} ")
    } else {
        format!(" {title} ")
    }
}

/// Render a selectable home page card
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    body: &str,
    is_selected: bool,
    is_external: bool,
) {
    let (border_style, title_style) = if is_selected {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(Span::styled(
            card_title(title, is_external),
            title_style,
        )));

    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_card_title_marks_external() {
        assert_eq!(card_title("Open a support case", true), " Open a support case ↗ ");
        assert_eq!(card_title("Share feedback", false), " Share feedback ");
    }

    #[test]
    fn test_render_button_draws_label() {
        let backend = TestBackend::new(20, BUTTON_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_button(frame, frame.area(), "Submit", true, true))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..20u16).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(row.contains("Submit"));
    }

    #[test]
    fn test_render_card_draws_title_and_body() {
        let backend = TestBackend::new(40, CARD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_card(frame, frame.area(), "Report a bug", "Describe it", false, false)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let top: String = (0..40u16).map(|x| buffer[(x, 0)].symbol()).collect();
        let body: String = (0..40u16).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(top.contains("Report a bug"));
        assert!(body.contains("Describe it"));
    }
}
