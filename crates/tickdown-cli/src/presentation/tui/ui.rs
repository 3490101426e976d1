use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::AppState;
use super::components::{
    AlertComponent, Component, CountdownComponent, FooterComponent, HeaderComponent,
    InputsComponent, ProgressComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(1), // Warning / status line
            Constraint::Length(4), // Progress gauge (with borders)
            Constraint::Length(3), // Countdown readout (with borders)
            Constraint::Length(4), // Interval editors (with borders)
            Constraint::Min(0),
            Constraint::Length(3), // Link + key help
        ])
        .split(f.area());

    let header = HeaderComponent;
    header.render(f, chunks[0], state);

    let alert = AlertComponent;
    alert.render(f, chunks[1], state);

    let progress = ProgressComponent;
    progress.render(f, chunks[2], state);

    let countdown = CountdownComponent;
    countdown.render(f, chunks[3], state);

    let inputs = InputsComponent;
    inputs.render(f, chunks[4], state);

    let footer = FooterComponent;
    footer.render(f, chunks[6], state);
}
