//! CLI module
//!
//! Command-line interface for reading ODB inventory data sources.
//!
//! # Commands
//!
//! - `read` - Read one data source and print its state
//! - `list` - List available data sources

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
