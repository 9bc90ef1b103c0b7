//! CLI commands and argument parsing

use crate::data_source::DataSourceKind;
use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read-only inventory of Oracle Database@AWS resources
#[derive(Parser, Debug)]
#[command(name = "odb-inventory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a data source and print its state
    Read {
        /// Data source to read
        #[arg(value_enum)]
        data_source: DataSourceKind,

        /// Inline data source config JSON
        #[arg(long, conflicts_with = "input")]
        input_json: Option<String>,

        /// Data source config file (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Cancel the read after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// List available data sources
    List,
}
