//! Home page: the feedback action cards

use super::components::{render_card, CARD_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let messages = &app.messages;
    let actions = app.modal.offered_actions();

    let [header_area, cards_area, footer_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            messages.tell_about_experience.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            messages.help_us_improve.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(header, header_area);

    let card_areas = Layout::vertical(actions.iter().map(|_| Constraint::Length(CARD_HEIGHT)))
        .split(cards_area);
    for (i, (action, card_area)) in actions.iter().zip(card_areas.iter()).enumerate() {
        let (title, body) = messages.card(*action);
        render_card(
            frame,
            *card_area,
            title,
            body,
            i == app.state.home_selected,
            app.modal.is_external(*action),
        );
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" {}", messages.cancel),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(footer, footer_area);
}
