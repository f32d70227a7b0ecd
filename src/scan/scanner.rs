//! Streaming scanner implementation
//!
//! Pulls bytes from a [`BufRead`] one token at a time. The grammar per
//! token is `unquoted | "(""|[^"])*"`, followed by a separator that is
//! either the delimiter byte or a line terminator (LF or CRLF).
//!
//! End of input immediately after a consumed separator (or at stream
//! start) is a clean end of stream; end of input anywhere inside a token,
//! or after a token with no separator, is a decode error.

use super::types::{Separator, Token};
use crate::error::{Error, Result};
use std::io::BufRead;

const QUOTE: u8 = b'"';
const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Pull-based field scanner over a byte stream
///
/// Positions are tracked as 1-based physical lines and byte columns and
/// are carried on every decode error. Field content is accumulated as
/// bytes and validated as UTF-8 when the token is materialized.
pub struct Scanner<R: BufRead> {
    reader: R,
    delimiter: u8,
    line: u64,
    column: u64,
}

impl<R: BufRead> Scanner<R> {
    /// Create a scanner over `reader` with the given field delimiter
    pub fn new(reader: R, delimiter: u8) -> Self {
        Self {
            reader,
            delimiter,
            line: 1,
            column: 1,
        }
    }

    /// Scan the next token.
    ///
    /// Returns `Ok(None)` at clean end of stream. Malformed input,
    /// unterminated quotes, end of input mid-token, and invalid UTF-8 all
    /// surface as errors; the scanner must not be used after an error.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let Some(first) = self.peek()? else {
            return Ok(None);
        };

        let start_line = self.line;
        let start_column = self.column;

        let bytes = if first == QUOTE {
            self.advance(first);
            self.scan_quoted(start_line, start_column)?
        } else {
            self.scan_unquoted()?
        };

        let value =
            String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 { line: start_line })?;
        let separator = self.scan_separator()?;

        Ok(Some(Token { value, separator }))
    }

    /// Scan an unquoted field body: zero or more bytes that are none of
    /// the delimiter, quote, CR, or LF. Stops before the separator.
    fn scan_unquoted(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        while let Some(byte) = self.peek()? {
            if byte == self.delimiter || byte == CR || byte == LF {
                break;
            }
            if byte == QUOTE {
                return Err(Error::malformed(
                    self.line,
                    self.column,
                    "bare quote inside unquoted field",
                ));
            }
            self.advance(byte);
            buf.push(byte);
        }
        Ok(buf)
    }

    /// Scan a quoted field body after the opening quote has been consumed.
    /// A doubled quote decodes to a single quote; line terminators inside
    /// the quotes are field content. Consumes the closing quote.
    fn scan_quoted(&mut self, start_line: u64, start_column: u64) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        loop {
            let Some(byte) = self.next_byte()? else {
                return Err(Error::UnterminatedQuote {
                    line: start_line,
                    column: start_column,
                });
            };
            if byte == QUOTE {
                if self.peek()? == Some(QUOTE) {
                    self.advance(QUOTE);
                    buf.push(QUOTE);
                } else {
                    return Ok(buf);
                }
            } else {
                buf.push(byte);
            }
        }
    }

    /// Scan the separator that must follow every token
    fn scan_separator(&mut self) -> Result<Separator> {
        let line = self.line;
        let column = self.column;

        match self.peek()? {
            None => Err(Error::UnexpectedEof { line, column }),
            Some(byte) if byte == self.delimiter => {
                self.advance(byte);
                Ok(Separator::Field)
            }
            Some(LF) => {
                self.advance(LF);
                Ok(Separator::Record)
            }
            Some(CR) => {
                self.advance(CR);
                if self.peek()? == Some(LF) {
                    self.advance(LF);
                    Ok(Separator::Record)
                } else {
                    Err(Error::malformed(
                        line,
                        column,
                        "bare carriage return outside quoted field",
                    ))
                }
            }
            Some(_) => Err(Error::malformed(
                line,
                column,
                "unexpected character after closing quote",
            )),
        }
    }

    /// Peek at the next byte without consuming it
    fn peek(&mut self) -> Result<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        Ok(buf.first().copied())
    }

    /// Consume one byte and read the next
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let byte = self.peek()?;
        if let Some(byte) = byte {
            self.advance(byte);
        }
        Ok(byte)
    }

    /// Consume one already-peeked byte and update the position
    fn advance(&mut self, byte: u8) {
        self.reader.consume(1);
        if byte == LF {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}
