//! Tests for the record codecs
//!
//! These tests verify:
//! - Exact 39-byte fixed-width encoding with zero-padding and space-padding
//! - UTF-8-safe truncation at field byte widths
//! - The preserved 4-byte GPA truncation boundary
//! - Delimited encoding/decoding and its minimum-field rule
//! - Round trips for both codecs

use rosterdb::record::{delimited, fixed, StudentRecord};
use rosterdb::RosterError;

// =============================================================================
// Fixed-Width Encoding Tests
// =============================================================================

#[test]
fn test_fixed_encode_layout() {
    let record = StudentRecord::new(1, "Alice", 3.8, "CS");
    let line = fixed::encode(&record);

    assert_eq!(line.len(), 39);
    assert_eq!(&line[0..5], "00001");
    assert_eq!(&line[5..25], "Alice               ");
    assert_eq!(&line[25..29], "3.80");
    assert_eq!(&line[29..39], "CS        ");
}

#[test]
fn test_fixed_encode_is_always_39_bytes() {
    let records = [
        StudentRecord::new(0, "", 0.0, ""),
        StudentRecord::new(99999, "Maximilian Montgomery III", 3.99, "Mathematics"),
        StudentRecord::new(7, "Ada", 4.0, "CS"),
    ];
    for record in &records {
        assert_eq!(fixed::encode(record).len(), 39);
    }
}

#[test]
fn test_fixed_encode_truncates_on_char_boundary() {
    // 1 ASCII byte + 11 two-byte chars = 23 bytes; the cut at byte 20
    // falls inside a character and must back up to byte 19
    let record = StudentRecord::new(5, "aééééééééééé", 3.0, "CS");
    let line = fixed::encode(&record);

    assert_eq!(line.len(), 39);
    let decoded = fixed::decode(&line).unwrap();
    assert_eq!(decoded.name, "aééééééééé");
}

#[test]
fn test_fixed_gpa_truncation_boundary() {
    // "10.00" is 5 bytes; the 4-byte field silently drops the last digit
    let record = StudentRecord::new(3, "Grace", 10.0, "CS");
    let line = fixed::encode(&record);

    assert_eq!(&line[25..29], "10.0");
    assert_eq!(fixed::decode(&line).unwrap().gpa, 10.0);
}

#[test]
fn test_fixed_round_trip() {
    let record = StudentRecord::new(42, "Alice", 3.8, "CS");
    let decoded = fixed::decode(&fixed::encode(&record)).unwrap();

    assert_eq!(decoded.id, 42);
    assert_eq!(decoded.name, "Alice");
    assert_eq!(decoded.gpa, 3.8);
    assert_eq!(decoded.dept, "CS");
}

// =============================================================================
// Fixed-Width Decoding Tests
// =============================================================================

#[test]
fn test_fixed_decode_tolerates_short_buffer() {
    // Everything after the GPA field is missing; dept comes back empty
    let decoded = fixed::decode("00007Ada                 4.00").unwrap();
    assert_eq!(decoded.id, 7);
    assert_eq!(decoded.name, "Ada");
    assert_eq!(decoded.gpa, 4.0);
    assert_eq!(decoded.dept, "");
}

#[test]
fn test_fixed_decode_rejects_bad_id() {
    let err = fixed::decode("abcdeAlice               3.80CS        ").unwrap_err();
    assert!(matches!(err, RosterError::Parse(_)));
}

#[test]
fn test_fixed_decode_rejects_bad_gpa() {
    let err = fixed::decode("00001Alice               x.yzCS        ").unwrap_err();
    assert!(matches!(err, RosterError::Parse(_)));
}

// =============================================================================
// Delimited Codec Tests
// =============================================================================

#[test]
fn test_delimited_encode() {
    let record = StudentRecord::new(10, "Charlie", 3.9, "Physics");
    assert_eq!(delimited::encode(&record, '|'), "10|Charlie|3.9|Physics");
}

#[test]
fn test_delimited_round_trip() {
    let record = StudentRecord::new(10, "Charlie", 3.9, "Physics");
    let decoded = delimited::decode(&delimited::encode(&record, '|'), '|').unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_delimited_custom_delimiter() {
    let record = StudentRecord::new(2, "Bob", 3.5, "Math");
    let line = delimited::encode(&record, ';');
    assert_eq!(line, "2;Bob;3.5;Math");
    assert_eq!(delimited::decode(&line, ';').unwrap(), record);
}

#[test]
fn test_delimited_decode_requires_four_parts() {
    let err = delimited::decode("1|Alice|3.8", '|').unwrap_err();
    assert!(matches!(err, RosterError::Parse(_)));
}

#[test]
fn test_delimited_decode_ignores_extra_parts() {
    let decoded = delimited::decode("1|Alice|3.8|CS|extra|parts", '|').unwrap();
    assert_eq!(decoded.dept, "CS");
}

#[test]
fn test_delimited_decode_rejects_bad_numerics() {
    assert!(matches!(
        delimited::decode("one|Alice|3.8|CS", '|'),
        Err(RosterError::Parse(_))
    ));
    assert!(matches!(
        delimited::decode("1|Alice|high|CS", '|'),
        Err(RosterError::Parse(_))
    ));
}

#[test]
fn test_delimited_whole_gpa_uses_default_form() {
    // 4.0 prints as "4" in the delimited layout; the value survives decode
    let record = StudentRecord::new(1, "Ada", 4.0, "CS");
    let line = delimited::encode(&record, '|');
    assert_eq!(line, "1|Ada|4|CS");
    assert_eq!(delimited::decode(&line, '|').unwrap().gpa, 4.0);
}
