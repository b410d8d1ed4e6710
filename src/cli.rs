//! Command-line argument parsing for flowq.
//!
//! The query, database, and output location are compiled in, so the CLI
//! carries no functional options. clap still provides `--help` and
//! `--version`.

use clap::Parser;

/// A one-shot Athena query runner for VPC flow log tables.
#[derive(Parser, Debug)]
#[command(name = "flowq")]
#[command(version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
