//! CLI module
//!
//! Command-line interface for decoding delimited responses.
//!
//! # Commands
//!
//! - `decode` - Decode a file or standard input
//! - `fetch` - Fetch a URL and decode the response body

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
