mod cli;
mod config;
mod report;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use waycheck_core::prelude::*;
use waycheck_core::Error;

use crate::cli::Cli;
use crate::config::{AppConfig, LoggingConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("waycheck: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli, config: AppConfig) -> Result<(), Error> {
    let graph = create_map_graph(&cli.snapshot)?;
    let context = ValidationContext::new(&graph).with_config(config.validator);

    let issues = if cli.entities.is_empty() {
        validate_all(&context)
    } else {
        cli.entities
            .iter()
            .map(|id| EntityId::from(id.as_str()))
            .flat_map(|id| validate_id(&id, &context))
            .collect()
    };
    info!("{} issues found", issues.len());

    let mut out = io::stdout().lock();
    report::write_issues(&mut out, &issues, cli.format)?;
    out.flush()?;
    Ok(())
}
