//! CLI commands and argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// rowstream command-line interface
#[derive(Parser, Debug)]
#[command(name = "rowstream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Field delimiter
    #[arg(short, long, global = true, default_value = ",")]
    pub delimiter: char,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Print a JSON summary line after the records
    #[arg(long, global = true)]
    pub summary: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a delimited file (or stdin when no file is given)
    Decode {
        /// Input file; reads standard input when omitted
        input: Option<PathBuf>,
    },

    /// Fetch a URL and decode the response body
    Fetch {
        /// URL to fetch
        url: String,

        /// Request header as 'name: value' (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every field surrounded by pipes, one record per line
    Pretty,
    /// One JSON array per record
    Json,
}
