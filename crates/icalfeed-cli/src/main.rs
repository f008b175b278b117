//! icalfeed CLI entry point.

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;

use icalfeed_cli::cli::Cli;
use icalfeed_cli::error::CliResult;
use icalfeed_cli::{demo, output};
use icalfeed_core::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::debug()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let calendar = demo::demo_calendar(&cli.league, Utc::now());
    tracing::debug!(league = %cli.league, events = calendar.events.len(), "built calendar");

    if let Some(ref path) = cli.output {
        output::write_ics(&calendar, path)?;
        return Ok(());
    }

    let rendered = output::render(&calendar, cli.render_format())?;
    println!("{}", rendered);
    Ok(())
}
