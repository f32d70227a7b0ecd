//! Tests for the decoder module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::io::Cursor;
use test_case::test_case;

fn records(input: &str) -> Vec<Vec<String>> {
    decode_str(input).read_all().unwrap()
}

fn fields(input: &str) -> Vec<(String, bool)> {
    Decoder::new(Cursor::new(input.as_bytes()))
        .map(|f| {
            let f = f.unwrap();
            (f.value, f.end_of_record)
        })
        .collect()
}

// ============================================================================
// DecoderConfig Tests
// ============================================================================

#[test]
fn test_decoder_config_default() {
    let config = DecoderConfig::default();
    assert_eq!(config.delimiter, b',');
    assert!(config.validate().is_ok());
}

#[test]
fn test_decoder_config_with_delimiter() {
    let config = DecoderConfig::with_delimiter(b'\t');
    assert_eq!(config.delimiter, b'\t');
    assert!(config.validate().is_ok());
}

#[test_case(b'"'; "quote")]
#[test_case(b'\r'; "carriage return")]
#[test_case(b'\n'; "line feed")]
#[test_case(0xd8; "non-ascii byte")]
fn test_decoder_config_rejects_delimiter(delimiter: u8) {
    let config = DecoderConfig::with_delimiter(delimiter);
    assert!(matches!(config.validate(), Err(Error::Config { .. })));
}

#[test]
fn test_invalid_config_fails_construction() {
    let result = Decoder::with_config(Cursor::new(&b""[..]), DecoderConfig::with_delimiter(b'"'));
    assert!(result.is_err());
}

// ============================================================================
// Field Decoder Tests
// ============================================================================

#[test]
fn test_field_events() {
    // Three fields: `a`, `b"c`, and an empty one closing the record.
    assert_eq!(
        fields("a,\"b\"\"c\",\n"),
        vec![
            ("a".to_string(), false),
            ("b\"c".to_string(), false),
            (String::new(), true),
        ]
    );
}

#[test_case("plain"; "word")]
#[test_case("two words"; "spaces")]
#[test_case("héllo wörld"; "multibyte")]
#[test_case("  padded  "; "padding kept")]
#[test_case("'single'"; "single quotes are plain text")]
fn test_unquoted_value_decodes_to_itself(value: &str) {
    assert_eq!(records(&format!("{value}\n")), vec![vec![value.to_string()]]);
}

#[test_case("he said \"hi\""; "embedded quotes")]
#[test_case("a,b"; "embedded delimiter")]
#[test_case("line1\nline2"; "embedded line terminator")]
#[test_case("\""; "single quote char")]
#[test_case(""; "empty value")]
#[test_case("\"\"\""; "three quote chars")]
fn test_quoted_round_trip(value: &str) {
    // Wrapping in quotes and doubling every embedded quote, then
    // decoding, returns the original value.
    let encoded = format!("\"{}\"\n", value.replace('"', "\"\""));
    assert_eq!(records(&encoded), vec![vec![value.to_string()]]);
}

#[test]
fn test_empty_field_between_commas_not_merged() {
    assert_eq!(
        records("a,,b\n"),
        vec![vec!["a".to_string(), String::new(), "b".to_string()]]
    );
}

#[test]
fn test_quoted_line_terminator_is_not_a_boundary() {
    let decoded = records("\"first\r\nsecond\",x\n");
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0], vec!["first\r\nsecond".to_string(), "x".to_string()]);
}

// ============================================================================
// Record Reader Tests
// ============================================================================

#[test]
fn test_two_records_of_three_fields() {
    assert_eq!(
        records("1,2,3\n4,5,6\n"),
        vec![
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
            vec!["4".to_string(), "5".to_string(), "6".to_string()],
        ]
    );
}

#[test]
fn test_variable_arity_is_permitted() {
    let decoded = records("1,2\n3,4,5\n6\n");
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[0].len(), 2);
    assert_eq!(decoded[1].len(), 3);
    assert_eq!(decoded[2].len(), 1);
}

#[test]
fn test_empty_input_has_no_records() {
    assert_eq!(records(""), Vec::<Vec<String>>::new());
}

#[test]
fn test_lone_line_terminator_is_one_empty_field() {
    assert_eq!(records("\n"), vec![vec![String::new()]]);
}

#[test]
fn test_open_record_emitted_at_clean_end() {
    // Input ends right after a field separator: the open record is
    // emitted as-is, without a synthesized trailing empty field.
    assert_eq!(
        records("a,b\nc,"),
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ]
    );
}

#[test]
fn test_crlf_records() {
    assert_eq!(
        records("a,b\r\nc,d\r\n"),
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ]
    );
}

#[test]
fn test_tab_delimited_records() {
    let reader = RecordReader::with_config(
        Cursor::new("a\tb,c\nd\te\n".as_bytes()),
        DecoderConfig::with_delimiter(b'\t'),
    )
    .unwrap();
    assert_eq!(
        reader.read_all().unwrap(),
        vec![
            vec!["a".to_string(), "b,c".to_string()],
            vec!["d".to_string(), "e".to_string()],
        ]
    );
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_unterminated_quote_is_an_error_not_a_truncated_field() {
    let results: Vec<_> = decode_str("\"unterminated").collect();
    assert_eq!(results.len(), 1);
    let err = results[0].as_ref().unwrap_err();
    assert!(matches!(err, Error::UnterminatedQuote { .. }));
    assert!(err.is_decode_error());
}

#[test]
fn test_fields_before_an_error_remain_valid() {
    let mut reader = decode_str("good,row\nbad\"x\n");

    let first = reader.next().unwrap().unwrap();
    assert_eq!(first, vec!["good".to_string(), "row".to_string()]);

    let second = reader.next().unwrap();
    assert!(matches!(second, Err(Error::Malformed { .. })));

    // Fused after the error.
    assert!(reader.next().is_none());
}

#[test]
fn test_decoder_is_fused_after_error() {
    let mut decoder = Decoder::new(Cursor::new(&b"\"open"[..]));
    assert!(decoder.next().unwrap().is_err());
    assert!(decoder.next().is_none());
    assert!(decoder.next().is_none());
}

#[test]
fn test_read_all_propagates_errors() {
    let result = decode_str("a,b\n\"oops\n").read_all();
    assert!(matches!(result, Err(Error::UnterminatedQuote { .. })));
}

#[test]
fn test_io_error_propagates() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("stream reset"))
        }
    }

    let reader = std::io::BufReader::new(FailingReader);
    let result = RecordReader::new(reader).read_all();
    match result {
        Err(Error::Io(e)) => assert_eq!(e.to_string(), "stream reset"),
        other => panic!("expected Io error, got {other:?}"),
    }
}
