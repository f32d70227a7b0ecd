//! Decoder types
//!
//! Configuration and output types for the streaming decoder.

use crate::error::{Error, Result};

/// Configuration for decoding a delimited response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Field delimiter byte (default: comma)
    pub delimiter: u8,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl DecoderConfig {
    /// Create a config with the default comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with a custom delimiter
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Validate the configuration.
    ///
    /// The delimiter must be an ASCII byte and must not collide with the
    /// quote character or a line terminator.
    pub fn validate(&self) -> Result<()> {
        match self.delimiter {
            b'"' => Err(Error::config("delimiter must not be the quote character")),
            b'\r' | b'\n' => Err(Error::config("delimiter must not be a line terminator")),
            byte if !byte.is_ascii() => Err(Error::config("delimiter must be an ASCII byte")),
            _ => Ok(()),
        }
    }
}

/// One decoded field together with its record-boundary marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    /// Decoded field value; empty fields are preserved
    pub value: String,
    /// True when this field was the last of its record (an unescaped line
    /// terminator followed it in the input)
    pub end_of_record: bool,
}
