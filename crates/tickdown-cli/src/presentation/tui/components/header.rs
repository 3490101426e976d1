use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::tui::app::AppState;

pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let title = Line::from(vec![
            Span::styled(
                "━━ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "tickdown",
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " ━━",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let (corner_text, corner_style) = if state.controller.in_error_state() {
            (
                "INVALID".to_string(),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                state.controller.now().format("%H:%M:%S UTC").to_string(),
                Style::default().fg(Color::DarkGray),
            )
        };

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        f.render_widget(Paragraph::new(title), layout[0]);
        f.render_widget(
            Paragraph::new(corner_text)
                .style(corner_style)
                .alignment(Alignment::Right),
            layout[1],
        );
    }
}
