use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::meter::meter;
use crate::presentation::tui::app::AppState;

pub(crate) struct ProgressComponent;

impl Component for ProgressComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let pct = state.controller.percentage();
        let ratio = pct / 100.0;

        let (gauge_color, border_color) = if ratio > 0.9 {
            (Color::Red, Color::LightRed)
        } else if ratio > 0.7 {
            (Color::Rgb(255, 165, 0), Color::Rgb(255, 200, 100)) // Orange instead of yellow
        } else {
            (Color::Green, Color::Cyan)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                " Elapsed ",
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Percentage
                Constraint::Length(1), // Progress bar
            ])
            .split(inner);

        let pct_line = Line::from(vec![Span::styled(
            format!("{:.2}%", pct),
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )]);
        f.render_widget(Paragraph::new(pct_line), chunks[0]);

        let bar = meter(pct, 40, state.display.unicode);
        let bar_line = Line::from(vec![Span::styled(bar, Style::default().fg(gauge_color))]);
        f.render_widget(Paragraph::new(bar_line), chunks[1]);
    }
}
