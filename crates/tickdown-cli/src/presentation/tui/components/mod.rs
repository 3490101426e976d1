use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) mod alert;
pub(crate) mod countdown;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod inputs;
pub(crate) mod progress;

pub(crate) use alert::AlertComponent;
pub(crate) use countdown::CountdownComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use inputs::InputsComponent;
pub(crate) use progress::ProgressComponent;
