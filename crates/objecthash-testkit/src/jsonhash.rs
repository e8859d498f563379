//! An object hash over JSON values.
//!
//! Written against the engine's public primitive hashers but with its own
//! container reduction, so it serves as an independent cross-check: a
//! record hashed with field names as keys, an equivalent
//! [`serde_json::Value`], and equivalent JSON text must all produce
//! byte-identical digests.

use objecthash::{
    hash_bool, hash_float, hash_int, hash_nil, hash_tagged, hash_uint, hash_unicode, tag, Digest,
    Error, Result, DIGEST_LEN,
};
use serde_json::Value;

#[derive(Clone, Copy)]
enum NumberForm {
    /// Hash every number as a float, the way JSON consumers see them.
    Float,
    /// Keep the integer/float distinction of the in-memory value.
    Preserve,
}

/// Hash JSON text the way the common JSON object hash does: every number
/// is treated as a float, since JSON has no integer type.
pub fn common_json_hash(json: &str) -> Result<Digest> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| Error::Malformed(format!("invalid JSON: {e}")))?;
    hash_value(&value, NumberForm::Float)
}

/// Hash an in-memory structural value, keeping integers as integers.
pub fn object_hash(value: &Value) -> Result<Digest> {
    hash_value(value, NumberForm::Preserve)
}

fn hash_value(value: &Value, numbers: NumberForm) -> Result<Digest> {
    match value {
        Value::Null => Ok(hash_nil()),
        Value::Bool(b) => Ok(hash_bool(*b)),
        Value::Number(n) => {
            let as_float = || {
                n.as_f64()
                    .ok_or_else(|| Error::Malformed(format!("number {n} does not fit an f64")))
            };
            match numbers {
                NumberForm::Float => hash_float(as_float()?),
                NumberForm::Preserve => {
                    if let Some(i) = n.as_i64() {
                        Ok(hash_int(i))
                    } else if let Some(u) = n.as_u64() {
                        Ok(hash_uint(u))
                    } else {
                        hash_float(as_float()?)
                    }
                }
            }
        }
        Value::String(s) => Ok(hash_unicode(s)),
        Value::Array(items) => {
            let mut payload = Vec::with_capacity(items.len() * DIGEST_LEN);
            for item in items {
                payload.extend_from_slice(hash_value(item, numbers)?.as_bytes());
            }
            Ok(hash_tagged(tag::LIST, &payload))
        }
        Value::Object(map) => {
            let mut entries = Vec::with_capacity(map.len());
            for (key, entry_value) in map {
                entries.push((hash_unicode(key), hash_value(entry_value, numbers)?));
            }
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut payload = Vec::with_capacity(entries.len() * 2 * DIGEST_LEN);
            for (khash, vhash) in &entries {
                payload.extend_from_slice(khash.as_bytes());
                payload.extend_from_slice(vhash.as_bytes());
            }
            Ok(hash_tagged(tag::MAP, &payload))
        }
    }
}
