//! Inflate encoded records to a minimum byte length.

use crate::record::Record;
use serde_json::Value;

/// Name of the padding field.
pub const PAD_FIELD: &str = "pad";

/// Character the padding field is filled with.
pub const PAD_CHAR: char = 'p';

/// Bytes held back for the padding field's own key, quotes and separator.
pub const PAD_RESERVE_BYTES: usize = 32;

/// Number of filler characters needed to bring `current_len` up to
/// `pad_bytes`, or `None` when no padding applies.
pub fn padding_len(pad_bytes: usize, current_len: usize) -> Option<usize> {
    if pad_bytes == 0 || current_len >= pad_bytes {
        return None;
    }
    Some((pad_bytes - current_len).saturating_sub(PAD_RESERVE_BYTES))
}

/// Pad `record` when its encoding `encoded` is shorter than `pad_bytes`.
///
/// Returns the final encoding. The result is a best-effort floor: the
/// reserve is fixed, so the padded line may land slightly above or below
/// `pad_bytes`.
pub fn pad_record(record: &mut Record, encoded: String, pad_bytes: usize) -> String {
    match padding_len(pad_bytes, encoded.len()) {
        Some(len) => {
            record.insert(PAD_FIELD, Value::String(PAD_CHAR.to_string().repeat(len)));
            record.encode()
        }
        None => encoded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_len() {
        assert_eq!(padding_len(0, 10), None);
        assert_eq!(padding_len(10, 10), None);
        assert_eq!(padding_len(10, 20), None);
        assert_eq!(padding_len(100, 10), Some(58));
        assert_eq!(padding_len(40, 10), Some(0));
    }

    #[test]
    fn test_pad_record_reaches_floor() {
        let mut record = Record::new(0);
        let encoded = record.encode();

        let padded = pad_record(&mut record, encoded, 200);

        assert!(padded.len() >= 200 - PAD_RESERVE_BYTES);
        assert!(padded.starts_with(r#"{"id":0,"pad":"ppp"#));
    }

    #[test]
    fn test_pad_adds_empty_field_inside_reserve() {
        let mut record = Record::new(0);
        let encoded = record.encode();

        let padded = pad_record(&mut record, encoded, 20);

        assert_eq!(padded, r#"{"id":0,"pad":""}"#);
    }

    #[test]
    fn test_no_padding_when_long_enough() {
        let mut record = Record::new(12345);
        let encoded = record.encode();

        let padded = pad_record(&mut record, encoded.clone(), 5);

        assert_eq!(padded, encoded);
        assert!(record.fields().get(PAD_FIELD).is_none());
    }

    #[test]
    fn test_padding_uses_utf8_byte_length() {
        let mut record = Record::new(0);
        record.insert("name", Value::String("ééééé".to_string()));
        let encoded = record.encode();
        let byte_len = encoded.len();
        assert!(byte_len > encoded.chars().count());

        let padded = pad_record(&mut record, encoded, 100);
        let pad = record.fields()[PAD_FIELD].as_str().unwrap();

        assert_eq!(pad.len(), 100 - byte_len - PAD_RESERVE_BYTES);
        assert!(padded.len() >= 100 - PAD_RESERVE_BYTES);
    }
}
