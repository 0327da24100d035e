//! taglog CLI - create and inspect timestamped per-tag log files

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "taglog={0},taglog_core={0},taglog_files={0}",
                    log_level
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let result = log_files(&cli).and_then(|files| match cli.command {
        Commands::Name { tag } => name::execute(&files, &tag),
        Commands::Create { tag } => create::execute(&files, &tag),
        Commands::Latest { tag } => latest::execute(&files, &tag),
        Commands::Tail { tag, lines } => tail::execute(&files, &tag, lines),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
