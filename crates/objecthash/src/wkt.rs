//! Well-known message types with hashing semantics of their own.
//!
//! A closed, name-keyed registry over the reserved `google.protobuf.`
//! namespace. Names in the namespace without a registered handler fail
//! closed: they may carry type-specific semantics a plain record hash
//! would get wrong.

use crate::digest::{self, tag, Digest};
use crate::error::{Error, Result};
use crate::value::{Message, Value};

/// The reserved namespace for well-known types.
const WELL_KNOWN_PREFIX: &str = "google.protobuf.";

const SECONDS_FIELD: u32 = 1;
const NANOS_FIELD: u32 = 2;

/// Dispatch for well-known record types. Returns `None` when the message
/// is an ordinary record.
pub(crate) fn hash_well_known(message: &Message) -> Option<Result<Digest>> {
    let full_name = message.descriptor().full_name();
    let short_name = full_name.strip_prefix(WELL_KNOWN_PREFIX)?;
    Some(match short_name {
        "Timestamp" | "Duration" => hash_seconds_nanos(message),
        _ => Err(Error::UnknownWellKnownType(full_name.to_string())),
    })
}

/// Timestamps and durations hash as an ordered list of two integers,
/// `seconds` then `nanos`, both always included even when zero.
///
/// Their unset-vs-zero distinction lives at the message level: an unset
/// value is a null reference, while a present one with zero fields is an
/// explicitly-set zero instant (or span).
fn hash_seconds_nanos(message: &Message) -> Result<Digest> {
    let mut payload = Vec::with_capacity(2 * digest::DIGEST_LEN);
    for number in [SECONDS_FIELD, NANOS_FIELD] {
        let value = match message.get(number) {
            None => 0,
            Some(Value::Int(v)) => *v,
            Some(other) => {
                return Err(Error::Malformed(format!(
                    "field {number} of `{}` must be an integer, got a {}",
                    message.descriptor().full_name(),
                    other.kind_name()
                )))
            }
        };
        payload.extend_from_slice(digest::hash_int(value).as_bytes());
    }
    Ok(digest::hash_tagged(tag::LIST, &payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDescriptor, FieldKind, MessageDescriptor};
    use crate::error::ErrorKind;
    use std::sync::Arc;

    fn timestamp() -> Arc<MessageDescriptor> {
        MessageDescriptor::new(
            "google.protobuf.Timestamp",
            vec![
                FieldDescriptor::new(1, "seconds", FieldKind::Int),
                FieldDescriptor::new(2, "nanos", FieldKind::Int),
            ],
        )
    }

    #[test]
    fn test_plain_records_are_not_claimed() {
        let descriptor = MessageDescriptor::new("example.Timestamp", vec![]);
        let message = Message::new(descriptor);
        assert!(hash_well_known(&message).is_none());
    }

    #[test]
    fn test_unset_fields_read_as_zero() {
        let empty = Message::new(timestamp());
        let zeroed = Message::new(timestamp())
            .with(1, Value::Int(0))
            .with(2, Value::Int(0));
        let a = hash_well_known(&empty).unwrap().unwrap();
        let b = hash_well_known(&zeroed).unwrap().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duration_shares_the_shape() {
        let duration = MessageDescriptor::new(
            "google.protobuf.Duration",
            vec![
                FieldDescriptor::new(1, "seconds", FieldKind::Int),
                FieldDescriptor::new(2, "nanos", FieldKind::Int),
            ],
        );
        let a = hash_well_known(&Message::new(duration).with(1, Value::Int(3)))
            .unwrap()
            .unwrap();
        let b = hash_well_known(&Message::new(timestamp()).with(1, Value::Int(3)))
            .unwrap()
            .unwrap();
        // Same shape, same digest: the list form carries no type name.
        assert_eq!(a, b);
    }

    #[test]
    fn test_unregistered_names_fail_closed() {
        let any = MessageDescriptor::new("google.protobuf.Any", vec![]);
        let err = hash_well_known(&Message::new(any)).unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedConstruct);
        assert!(err.to_string().contains("google.protobuf.Any"));
    }

    #[test]
    fn test_bad_field_kinds_are_rejected() {
        let bent = MessageDescriptor::new(
            "google.protobuf.Timestamp",
            vec![FieldDescriptor::new(1, "seconds", FieldKind::Float)],
        );
        let message = Message::new(bent).with(1, Value::Float(1.0));
        let err = hash_well_known(&message).unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }
}
