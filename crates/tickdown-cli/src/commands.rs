use super::args::{Cli, Commands};
use super::handlers;
use crate::config;
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir);

    match cli.command {
        Some(Commands::Open { link }) => handlers::open::handle(&ctx, link),

        Some(Commands::Share {
            start,
            end,
            duration,
        }) => handlers::share::handle(&ctx, start, end, duration),

        Some(Commands::Inspect { link, format }) => handlers::inspect::handle(&link, format),

        // Bare `tickdown [LINK]` opens the widget, the same way pasting a
        // link into the address bar would.
        None => handlers::open::handle(&ctx, cli.link),
    }
}
