use chrono::{Local, NaiveDate, NaiveTime, TimeZone, Utc};
use crossterm::event::KeyCode;
use tickdown_core::{Clock, Controller, SystemClock};

use crate::config::DisplayConfig;

/// The four editable fields of the interval, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    StartDate,
    StartTime,
    EndDate,
    EndTime,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::StartDate => Focus::StartTime,
            Focus::StartTime => Focus::EndDate,
            Focus::EndDate => Focus::EndTime,
            Focus::EndTime => Focus::StartDate,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::StartDate => Focus::EndTime,
            Focus::StartTime => Focus::StartDate,
            Focus::EndDate => Focus::StartTime,
            Focus::EndTime => Focus::EndDate,
        }
    }

    pub fn endpoint(self) -> tickdown_core::Endpoint {
        match self {
            Focus::StartDate | Focus::StartTime => tickdown_core::Endpoint::Start,
            Focus::EndDate | Focus::EndTime => tickdown_core::Endpoint::End,
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, Focus::StartDate | Focus::EndDate)
    }

    fn endpoint_name(self) -> &'static str {
        match self.endpoint() {
            tickdown_core::Endpoint::Start => "start",
            tickdown_core::Endpoint::End => "end",
        }
    }

    fn format_hint(self) -> &'static str {
        if self.is_date() {
            "expected YYYY-MM-DD"
        } else {
            "expected HH:MM:SS"
        }
    }

    fn max_len(self) -> usize {
        if self.is_date() { 10 } else { 8 }
    }
}

/// What the inputs pane should draw for one field.
pub(crate) struct FieldDisplay {
    pub text: String,
    pub focused: bool,
    pub editing: bool,
}

pub(crate) struct AppState {
    pub controller: Controller,
    pub display: DisplayConfig,
    pub focus: Focus,
    pub edit_buffer: String,
    pub status: Option<String>,
}

impl AppState {
    pub fn new(controller: Controller, display: DisplayConfig) -> Self {
        Self {
            controller,
            display,
            focus: Focus::StartDate,
            edit_buffer: String::new(),
            status: None,
        }
    }

    pub fn on_tick(&mut self) {
        self.controller.tick(SystemClock.now());
    }

    /// Returns true when the session should end.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        self.status = None;

        match code {
            KeyCode::Char('q') if self.edit_buffer.is_empty() => return true,
            KeyCode::Esc => {
                if self.edit_buffer.is_empty() {
                    return true;
                }
                self.edit_buffer.clear();
            }
            KeyCode::Tab => {
                self.edit_buffer.clear();
                self.focus = self.focus.next();
            }
            KeyCode::BackTab => {
                self.edit_buffer.clear();
                self.focus = self.focus.prev();
            }
            KeyCode::Char('x') if self.edit_buffer.is_empty() => {
                self.controller.set_endpoint(self.focus.endpoint(), None);
                self.status = Some(format!("{} cleared", self.focus.endpoint_name()));
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Char(c) if self.accepts(c) => {
                if self.edit_buffer.len() < self.focus.max_len() {
                    self.edit_buffer.push(c);
                }
            }
            _ => {}
        }

        false
    }

    fn accepts(&self, c: char) -> bool {
        let separator = if self.focus.is_date() { '-' } else { ':' };
        c.is_ascii_digit() || c == separator
    }

    /// Parse the buffer and store the edited field. Unparseable input is
    /// dropped without touching the interval; only the status line notes it.
    fn commit_edit(&mut self) {
        let raw = std::mem::take(&mut self.edit_buffer);
        if raw.is_empty() {
            return;
        }

        let endpoint = self.focus.endpoint();
        let stored_local = self
            .controller
            .interval()
            .get(endpoint)
            .map(|instant| instant.with_timezone(&Local));

        // Edits arrive as local wall-clock halves; the missing half comes
        // from the stored value, or a plain default when the endpoint is
        // unset (midnight for time, today for date).
        let naive = if self.focus.is_date() {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok().map(|date| {
                let time = stored_local.map(|dt| dt.time()).unwrap_or(NaiveTime::MIN);
                date.and_time(time)
            })
        } else {
            NaiveTime::parse_from_str(&raw, "%H:%M:%S").ok().map(|time| {
                let date = stored_local
                    .map(|dt| dt.date_naive())
                    .unwrap_or_else(|| Local::now().date_naive());
                date.and_time(time)
            })
        };

        let Some(naive) = naive else {
            self.status = Some(format!("ignored '{}' ({})", raw, self.focus.format_hint()));
            return;
        };
        let Some(local) = Local.from_local_datetime(&naive).single() else {
            self.status = Some(format!("ignored '{}': not a real local time", raw));
            return;
        };

        self.controller
            .set_endpoint(endpoint, Some(local.with_timezone(&Utc)));
        self.status = Some(format!("{} updated", self.focus.endpoint_name()));
    }

    pub fn field(&self, field: Focus) -> FieldDisplay {
        let focused = self.focus == field;
        if focused && !self.edit_buffer.is_empty() {
            return FieldDisplay {
                text: self.edit_buffer.clone(),
                focused,
                editing: true,
            };
        }

        let text = match self.controller.interval().get(field.endpoint()) {
            Some(instant) => {
                let local = instant.with_timezone(&Local);
                if field.is_date() {
                    local.format("%Y-%m-%d").to_string()
                } else {
                    local.format("%H:%M:%S").to_string()
                }
            }
            None => String::from(if field.is_date() { "----------" } else { "--:--:--" }),
        };

        FieldDisplay {
            text,
            focused,
            editing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tickdown_core::{CountdownView, InMemoryLink};

    fn test_app() -> AppState {
        let controller = Controller::mount(
            SystemClock.now(),
            Duration::minutes(1),
            Box::new(InMemoryLink::empty()),
        );
        AppState::new(controller, DisplayConfig::default())
    }

    fn type_str(app: &mut AppState, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_fills_the_edit_buffer() {
        let mut app = test_app();
        type_str(&mut app, "2020-04-01");

        let field = app.field(Focus::StartDate);
        assert!(field.editing);
        assert_eq!(field.text, "2020-04-01");
    }

    #[test]
    fn test_buffer_rejects_foreign_characters_and_overflow() {
        let mut app = test_app();
        type_str(&mut app, "20:bogus!x-"); // ':' and letters don't fit a date
        assert_eq!(app.edit_buffer, "20-");

        type_str(&mut app, "9999999999999");
        assert_eq!(app.edit_buffer.len(), 10);
    }

    #[test]
    fn test_commit_round_trips_through_local_time() {
        let mut app = test_app();

        app.focus = Focus::StartTime;
        type_str(&mut app, "12:00:00");
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.field(Focus::StartTime).text, "12:00:00");

        app.focus = Focus::StartDate;
        type_str(&mut app, "2020-04-01");
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.field(Focus::StartDate).text, "2020-04-01");
        // The time half survives a date edit.
        assert_eq!(app.field(Focus::StartTime).text, "12:00:00");
    }

    #[test]
    fn test_bad_input_leaves_the_interval_alone() {
        let mut app = test_app();
        let before = *app.controller.interval();

        app.focus = Focus::EndTime;
        type_str(&mut app, "99:99:99");
        app.handle_key(KeyCode::Enter);

        assert_eq!(*app.controller.interval(), before);
        assert!(app.edit_buffer.is_empty());
        assert!(app.status.as_deref().is_some_and(|s| s.contains("ignored")));
    }

    #[test]
    fn test_x_clears_the_focused_endpoint() {
        let mut app = test_app();
        app.focus = Focus::EndTime;
        app.handle_key(KeyCode::Char('x'));

        assert!(app.controller.interval().end_time.is_none());
        assert_eq!(app.field(Focus::EndTime).text, "--:--:--");
        assert_eq!(app.field(Focus::EndDate).text, "----------");
        assert_eq!(app.controller.view(), CountdownView::Placeholder);
    }

    #[test]
    fn test_editing_into_the_past_raises_the_error_flag() {
        let mut app = test_app();

        app.focus = Focus::EndDate;
        type_str(&mut app, "2000-01-01");
        app.handle_key(KeyCode::Enter);

        assert!(app.controller.in_error_state());
    }

    #[test]
    fn test_tab_cycles_through_all_fields() {
        let mut app = test_app();
        let mut seen = vec![app.focus];
        for _ in 0..3 {
            app.handle_key(KeyCode::Tab);
            seen.push(app.focus);
        }
        assert_eq!(
            seen,
            vec![
                Focus::StartDate,
                Focus::StartTime,
                Focus::EndDate,
                Focus::EndTime
            ]
        );

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus, Focus::StartDate);
        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.focus, Focus::EndTime);
    }

    #[test]
    fn test_escape_cancels_an_edit_before_quitting() {
        let mut app = test_app();
        type_str(&mut app, "2020");

        assert!(!app.handle_key(KeyCode::Esc));
        assert!(app.edit_buffer.is_empty());
        assert!(app.handle_key(KeyCode::Esc));
    }

    #[test]
    fn test_quit_is_disabled_mid_edit() {
        let mut app = test_app();
        type_str(&mut app, "2020");

        assert!(!app.handle_key(KeyCode::Char('q')));
        assert_eq!(app.edit_buffer, "2020");
    }
}
