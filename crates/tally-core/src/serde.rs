//! Encoding of results that cross a producer boundary.
//!
//! JSON output is canonical: object keys are emitted in sorted order at
//! every depth, so equal values always encode to equal bytes and hash to the
//! same digest.

use std::io;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::{ErrorInfo, TallyError};

fn encoding_error(code: &str, format: &str, err: impl ToString) -> TallyError {
    TallyError::Serde(ErrorInfo::new(code, err.to_string()).with_context("format", format))
}

fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|left, right| left.0.cmp(&right.0));
            for (key, mut inner) in entries {
                sort_keys(&mut inner);
                map.insert(key, inner);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(sort_keys),
        _ => {}
    }
}

/// Writes `value` as canonical JSON into `writer`.
pub fn write_canonical_json<W, T>(writer: W, value: &T) -> Result<(), TallyError>
where
    W: io::Write,
    T: Serialize + ?Sized,
{
    let mut tree =
        serde_json::to_value(value).map_err(|err| encoding_error("json-encode", "json", err))?;
    sort_keys(&mut tree);
    serde_json::to_writer(writer, &tree).map_err(|err| encoding_error("json-write", "json", err))
}

/// Serializes `value` into canonical JSON bytes.
pub fn to_canonical_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, TallyError> {
    let mut bytes = Vec::new();
    write_canonical_json(&mut bytes, value)?;
    Ok(bytes)
}

/// Decodes JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, TallyError> {
    serde_json::from_slice(data).map_err(|err| encoding_error("json-decode", "json", err))
}

/// Serializes `value` into YAML, the format policies are written in.
pub fn to_yaml_string<T: Serialize + ?Sized>(value: &T) -> Result<String, TallyError> {
    serde_yaml::to_string(value).map_err(|err| encoding_error("yaml-encode", "yaml", err))
}

/// Decodes a YAML payload.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, TallyError> {
    serde_yaml::from_slice(data).map_err(|err| encoding_error("yaml-decode", "yaml", err))
}
