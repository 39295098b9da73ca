//! Argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use topics_core::constants::VERSION;

#[derive(Parser, Debug)]
#[command(name = "topics", version = VERSION, about = "Classify domains and URLs into topics")]
pub struct Cli {
    /// Model bundle directory (config, taxonomy, overrides, model files)
    #[arg(short = 'b', long = "bundle", value_name = "DIR")]
    pub bundle: PathBuf,

    /// Log output format
    #[arg(long = "log-format", value_enum, global = true, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print every public topic as JSON
    Topics,
    /// Classify inputs, one JSON object per line
    Classify {
        /// Print the full classification record
        #[arg(long)]
        explain: bool,
        /// Inputs to classify; read from stdin, one per line, when omitted
        inputs: Vec<String>,
    },
    /// Print the normalized form of each input
    Normalize {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
