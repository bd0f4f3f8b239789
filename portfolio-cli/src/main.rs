//! `portfolio` binary entry point
//!
//! Prerenders the portfolio page with the Leptos SSR renderer and writes it
//! as a standalone HTML document.

mod args;
mod commands;

use clap::Parser;

use crate::args::Args;

fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries `render --stdout` and `content` output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    tracing::debug!("portfolio v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = commands::run(&args) {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}
