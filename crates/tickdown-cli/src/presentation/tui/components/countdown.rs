use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};
use tickdown_core::CountdownView;

use super::Component;
use crate::presentation::tui::app::AppState;

pub(crate) struct CountdownComponent;

impl Component for CountdownComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let readout = match state.controller.view() {
            CountdownView::Placeholder => Span::styled("-", Style::default().fg(Color::DarkGray)),
            CountdownView::Finished => Span::styled(
                state.display.finished_text.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            CountdownView::Counting(remaining) => Span::styled(
                remaining.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Remaining ",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ));

        f.render_widget(Paragraph::new(readout).block(block), area);
    }
}
