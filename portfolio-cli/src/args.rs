//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default output path for `portfolio render`.
pub const DEFAULT_OUT: &str = "dist/index.html";

#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Prerender the portfolio page to static HTML")]
#[command(version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Config file (defaults to ./portfolio.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page to an HTML file
    Render {
        /// Output file
        #[arg(long, short, default_value = DEFAULT_OUT)]
        out: PathBuf,

        /// Print the document instead of writing a file
        #[arg(long, conflicts_with = "out")]
        stdout: bool,
    },

    /// Render the page and verify anchors and section order
    Check,

    /// Print the page content tables as JSON
    Content {
        /// Indent the JSON
        #[arg(long)]
        pretty: bool,
    },
}
