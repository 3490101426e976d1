use anyhow::Result;
use chrono::Duration;
use is_terminal::IsTerminal;
use tickdown_core::{Clock, Controller, InMemoryLink, SystemClock};

use crate::context::ExecutionContext;
use crate::presentation::tui;
use crate::presentation::views::SnapshotView;

pub fn handle(ctx: &ExecutionContext, link: Option<String>) -> Result<()> {
    let config = ctx.config()?;

    let slot = match link {
        Some(link) => InMemoryLink::seeded(link),
        None => InMemoryLink::empty(),
    };
    let controller = Controller::mount(
        SystemClock.now(),
        default_span(config.defaults.duration_secs),
        Box::new(slot),
    );

    if std::io::stdout().is_terminal() {
        tui::run(controller, config.display.clone())
    } else {
        // Piped invocations get one snapshot of the widget instead of an
        // alternate-screen session, so the output stays scriptable.
        print!("{}", SnapshotView::new(&controller, &config.display));
        Ok(())
    }
}

/// A configured span too large for the calendar falls back to the
/// one-minute default instead of refusing to open.
fn default_span(secs: u64) -> Duration {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or_else(|| Duration::minutes(1))
}
