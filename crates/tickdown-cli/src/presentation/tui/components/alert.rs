use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::tui::app::AppState;

/// One line under the title bar. Priority goes to the inverted-interval
/// warning; otherwise the last edit outcome shows here, dimmed.
pub(crate) struct AlertComponent;

impl Component for AlertComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let widget = if state.controller.in_error_state() {
            Paragraph::new("start is after end").style(
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )
        } else if let Some(status) = &state.status {
            Paragraph::new(status.as_str()).style(Style::default().fg(Color::DarkGray))
        } else {
            return;
        };

        f.render_widget(widget, area);
    }
}
