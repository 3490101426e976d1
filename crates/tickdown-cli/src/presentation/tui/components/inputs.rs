use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::tui::app::{AppState, FieldDisplay, Focus};

/// Date and time editors for both endpoints. The focused field is drawn
/// reversed; a field with a pending edit turns yellow until Enter lands it.
pub(crate) struct InputsComponent;

impl Component for InputsComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Interval ",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ));

        let rows = vec![
            field_row(
                "Start",
                state.field(Focus::StartDate),
                state.field(Focus::StartTime),
            ),
            field_row(
                "End",
                state.field(Focus::EndDate),
                state.field(Focus::EndTime),
            ),
        ];

        f.render_widget(Paragraph::new(rows).block(block), area);
    }
}

fn field_row(label: &str, date: FieldDisplay, time: FieldDisplay) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<7}", label), Style::default().fg(Color::Gray)),
        field_span(date, 10),
        Span::raw("  "),
        field_span(time, 8),
    ])
}

fn field_span(field: FieldDisplay, width: usize) -> Span<'static> {
    let mut style = if field.editing {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    if field.focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("{:<width$}", field.text), style)
}
