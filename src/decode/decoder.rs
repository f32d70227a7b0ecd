//! Streaming decoder implementations
//!
//! [`Decoder`] yields one decoded field at a time; [`RecordReader`]
//! assembles fields into records. Both consume the input exactly once,
//! left to right, and stop at the first error.

use super::types::{DecodedField, DecoderConfig};
use crate::error::Result;
use crate::scan::{Scanner, Separator};
use crate::types::Record;
use std::io::{BufRead, Cursor};

// ============================================================================
// Field Decoder
// ============================================================================

/// Lazy field decoder over a delimited byte stream
///
/// Iterates over `Result<DecodedField>`: each item is one decoded field
/// value plus a marker telling whether it closed its record. The iterator
/// is fused: after yielding an error or reaching end of input, all
/// subsequent calls return `None`. Fields yielded before an error remain
/// valid; no content of the failed token is emitted.
pub struct Decoder<R: BufRead> {
    scanner: Scanner<R>,
    done: bool,
}

impl<R: BufRead> Decoder<R> {
    /// Create a decoder with the default configuration
    pub fn new(reader: R) -> Self {
        Self {
            scanner: Scanner::new(reader, DecoderConfig::default().delimiter),
            done: false,
        }
    }

    /// Create a decoder with a custom configuration
    pub fn with_config(reader: R, config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scanner: Scanner::new(reader, config.delimiter),
            done: false,
        })
    }
}

impl<R: BufRead> Iterator for Decoder<R> {
    type Item = Result<DecodedField>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.next_token() {
            Ok(Some(token)) => Some(Ok(DecodedField {
                end_of_record: token.separator == Separator::Record,
                value: token.value,
            })),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

// ============================================================================
// Record Reader
// ============================================================================

/// Record assembler over a [`Decoder`]
///
/// Iterates over `Result<Record>`, one record per unescaped line
/// terminator. Records may have variable field counts; no arity is
/// validated. When the stream ends cleanly with fields still open (the
/// input ended right after a field separator), those fields are emitted
/// as a final record.
pub struct RecordReader<R: BufRead> {
    decoder: Decoder<R>,
    pending: Record,
}

impl<R: BufRead> RecordReader<R> {
    /// Create a record reader with the default configuration
    pub fn new(reader: R) -> Self {
        Self {
            decoder: Decoder::new(reader),
            pending: Record::new(),
        }
    }

    /// Create a record reader with a custom configuration
    pub fn with_config(reader: R, config: DecoderConfig) -> Result<Self> {
        Ok(Self {
            decoder: Decoder::with_config(reader, config)?,
            pending: Record::new(),
        })
    }

    /// Decode every remaining record into a vector.
    ///
    /// Fails on the first decode or I/O error; records decoded before the
    /// error are discarded. Callers that want them should iterate instead.
    pub fn read_all(self) -> Result<Vec<Record>> {
        self.collect()
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.decoder.next() {
                Some(Ok(field)) => {
                    self.pending.push(field.value);
                    if field.end_of_record {
                        return Some(Ok(std::mem::take(&mut self.pending)));
                    }
                }
                Some(Err(e)) => {
                    // Never emit partial content of a failed record.
                    self.pending.clear();
                    return Some(Err(e));
                }
                None => {
                    if self.pending.is_empty() {
                        return None;
                    }
                    return Some(Ok(std::mem::take(&mut self.pending)));
                }
            }
        }
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

/// Decode records from an in-memory string
pub fn decode_str(input: &str) -> RecordReader<Cursor<&[u8]>> {
    RecordReader::new(Cursor::new(input.as_bytes()))
}
