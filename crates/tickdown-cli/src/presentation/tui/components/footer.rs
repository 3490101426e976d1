use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::tui::app::AppState;

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let link = state.controller.share_link().unwrap_or("-").to_string();

        let lines = vec![
            Line::from(vec![
                Span::styled("Link  ", Style::default().fg(Color::Gray)),
                Span::styled(link, Style::default().fg(Color::Cyan)),
            ]),
            Line::from(Span::styled(
                "Tab: next field  •  Enter: apply  •  x: clear  •  q: quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let widget = Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(widget, area);
    }
}
