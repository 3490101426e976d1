use crate::types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tickdown")]
#[command(about = "Share-a-link countdown widget for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (defaults to the OS data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Share link to open; same as `tickdown open <LINK>`
    #[arg(value_name = "LINK")]
    pub link: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the countdown widget, seeded from a share link if given
    Open {
        #[arg(value_name = "LINK")]
        link: Option<String>,
    },

    /// Mint a share link without opening the widget
    Share {
        /// Start instant as RFC 3339 (defaults to now)
        #[arg(long, value_name = "TIMESTAMP")]
        start: Option<String>,

        /// End instant as RFC 3339
        #[arg(long, value_name = "TIMESTAMP", conflicts_with = "duration")]
        end: Option<String>,

        /// Count down this many seconds from the start
        #[arg(long, value_name = "SECONDS")]
        duration: Option<u64>,
    },

    /// Decode a share link and report what it carries
    Inspect {
        #[arg(value_name = "LINK")]
        link: String,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },
}
