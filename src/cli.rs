use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Find highways cut off from the rest of the road network
#[derive(Debug, Parser)]
#[command(name = "waycheck", version, about)]
pub struct Cli {
    /// JSON map snapshot to validate
    pub snapshot: PathBuf,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only validate this entity (repeatable). Every way and relation is
    /// validated when omitted.
    #[arg(short, long = "entity", value_name = "ID")]
    pub entities: Vec<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
