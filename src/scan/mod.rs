//! Low-level field tokenizer
//!
//! # Overview
//!
//! The scanner is a single-pass tokenizer over a byte stream. Each call
//! produces one field token together with the separator that terminated it:
//! a field is either unquoted text (no delimiter, quote, or line terminator)
//! or a double-quoted string where an embedded quote is doubled.
//!
//! Matching is anchored at the current position: input that fits neither
//! alternative is a decode error, never skipped.

mod scanner;
mod types;

pub use scanner::Scanner;
pub use types::{Separator, Token};
