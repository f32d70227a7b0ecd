//! Streaming field/record decoder
//!
//! # Overview
//!
//! The decode module turns a delimited response body into decoded values.
//! [`Decoder`] is the lazy core: an iterator of (field value,
//! is-record-boundary) pairs over any [`std::io::BufRead`].
//! [`RecordReader`] layers record assembly on top of it.
//!
//! Decoding is a pure transformation: the input is consumed exactly once,
//! left to right, and nothing is buffered beyond the field currently
//! being scanned. Malformed input stops decoding with an error distinct
//! from end of stream; fields emitted before the error remain valid.

mod decoder;
mod types;

pub use decoder::{decode_str, Decoder, RecordReader};
pub use types::{DecodedField, DecoderConfig};

#[cfg(test)]
mod tests;
