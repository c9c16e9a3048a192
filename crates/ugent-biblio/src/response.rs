//! Response decoding for the Biblio API.
//!
//! Turns an HTTP status and raw body into an optional payload. The export
//! endpoints answer with one JSON object per line instead of a single
//! document, so whole-body decoding falls back to line-by-line decoding.

use serde_json::Value;

use crate::error::ClientResult;
use crate::models::{Payload, Record};
use crate::reshape::reshape_keys;

/// Decode a response body.
///
/// A non-success status yields `Ok(None)` no matter what the body holds. A
/// body that is neither a JSON value nor newline-delimited JSON is a decode
/// error; one bad line fails the whole call.
///
/// # Errors
///
/// Returns `ClientError::Decode` on a malformed body.
pub fn decode(status: u16, body: &str) -> ClientResult<Option<Payload>> {
    if status != 200 {
        return Ok(None);
    }

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return payload_from_value(value).map(Some);
    }

    // One JSON object per line; empty lines carry nothing.
    let records = body
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(record_from_line)
        .collect::<ClientResult<Vec<_>>>()?;

    Ok(Some(Payload::Many(records)))
}

fn payload_from_value(value: Value) -> ClientResult<Payload> {
    match reshape_keys(value) {
        Value::Array(items) => {
            let records =
                items.into_iter().map(record_from_value).collect::<ClientResult<Vec<_>>>()?;
            Ok(Payload::Many(records))
        }
        other => Ok(Payload::Single(record_from_value(other)?)),
    }
}

fn record_from_line(line: &str) -> ClientResult<Record> {
    let value: Value = serde_json::from_str(line)?;
    record_from_value(reshape_keys(value))
}

fn record_from_value(value: Value) -> ClientResult<Record> {
    let fields: serde_json::Map<String, Value> = serde_json::from_value(value)?;
    Ok(Record::from(fields))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_non_success_status_yields_no_result() {
        assert!(decode(404, "ignored").unwrap().is_none());
        assert!(decode(500, r#"{"id":"1"}"#).unwrap().is_none());
    }

    #[test]
    fn test_single_object_body() {
        let payload = decode(200, r#"{"_id":"123"}"#).unwrap().unwrap();

        let Payload::Single(record) = payload else {
            panic!("expected a single record");
        };
        assert_eq!(record.id(), Some("123"));
    }

    #[test]
    fn test_array_body() {
        let payload = decode(200, r#"[{"_id":"1"},{"_id":"2"}]"#).unwrap().unwrap();

        let Payload::Many(records) = payload else {
            panic!("expected a sequence of records");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), Some("1"));
    }

    #[test]
    fn test_newline_delimited_body_preserves_order() {
        let payload = decode(200, "{\"a\":1}\n{\"b\":2}\n").unwrap().unwrap();

        let Payload::Many(records) = payload else {
            panic!("expected a sequence of records");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("a"), Some(&json!(1)));
        assert_eq!(records[1].get("b"), Some(&json!(2)));
    }

    #[test]
    fn test_empty_lines_are_discarded() {
        let payload = decode(200, "\n{\"a\":1}\n\n{\"b\":2}\n\n\n").unwrap().unwrap();

        let Payload::Many(records) = payload else {
            panic!("expected a sequence of records");
        };
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_empty_body_yields_empty_sequence() {
        let payload = decode(200, "").unwrap().unwrap();
        assert_eq!(payload.into_records().len(), 0);
    }

    #[test]
    fn test_one_bad_line_fails_the_whole_call() {
        let result = decode(200, "{\"a\":1}\nnot json\n{\"b\":2}\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        assert!(decode(200, "{ invalid json here").is_err());
    }

    #[test]
    fn test_keys_are_reshaped_at_every_depth() {
        let body = r#"{"_id":"1","author":[{"first-name":"Stef"}]}"#;
        let payload = decode(200, body).unwrap().unwrap();

        let Payload::Single(record) = payload else {
            panic!("expected a single record");
        };
        assert_eq!(record.get("author"), Some(&json!([{"first_name": "Stef"}])));
    }
}
