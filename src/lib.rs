// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # rowstream
//!
//! A minimal, Rust-native streaming decoder for delimited table-query
//! responses.
//!
//! Table-query services answer with plaintext bodies in a
//! comma/newline-delimited format where a field is either plain text or a
//! double-quoted string with embedded quotes doubled. `rowstream` consumes
//! such a body as a stream and lazily produces decoded field values plus
//! record-boundary markers, without ever buffering the whole response.
//!
//! ## Features
//!
//! - **Streaming**: pull-based decoding over any [`std::io::BufRead`]
//! - **Lazy output**: one decoded field (and its record boundary) at a time
//! - **Strict grammar**: malformed input is an error, never silently skipped
//! - **HTTP source**: blocking client with retry/backoff for fetching bodies
//! - **CLI**: decode files, stdin, or remote responses from the shell
//!
//! ## Quick Start
//!
//! ```rust
//! use rowstream::decode::decode_str;
//! use rowstream::Result;
//!
//! fn main() -> Result<()> {
//!     for record in decode_str("a,\"b\"\"c\",\n1,2,3\n") {
//!         let record = record?;
//!         println!("{record:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        RecordReader                        │
//! │            Iterator<Item = Result<Vec<String>>>            │
//! └────────────────────────────┬───────────────────────────────┘
//! ┌────────────────────────────┴───────────────────────────────┐
//! │                          Decoder                           │
//! │           Iterator<Item = Result<DecodedField>>            │
//! └────────────────────────────┬───────────────────────────────┘
//! ┌────────────────────────────┴───────────────────────────────┐
//! │                          Scanner                           │
//! │        unquoted | "(""|[^"])*"  →  Token + Separator       │
//! └────────────────────────────┬───────────────────────────────┘
//!                      impl std::io::BufRead
//!              (file, stdin, HTTP response body, ...)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add field-level docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Low-level field tokenizer
pub mod scan;

/// Streaming field/record decoder
pub mod decode;

/// Blocking HTTP source for response bodies
pub mod http;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use decode::{decode_str, DecodedField, Decoder, DecoderConfig, RecordReader};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
