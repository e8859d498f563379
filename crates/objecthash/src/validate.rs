//! Pre-hash structural validation.
//!
//! This pass plays the role a wire marshaller plays elsewhere: the engine
//! only consumes the pass/fail outcome. A message that fails here is
//! rejected before any part of it is hashed.

use crate::descriptor::FieldKind;
use crate::error::{Error, Result};
use crate::value::{MapKey, Message, Value};

/// Check that a message is well-formed with respect to its descriptor:
/// every set field is declared and kind-correct, every `required` field
/// is set, and at most one arm of each one-of is selected. Recursive
/// through nested messages, lists, and maps.
pub(crate) fn check_well_formed(message: &Message) -> Result<()> {
    let descriptor = message.descriptor();

    for (number, value) in message.entries() {
        let Some(field) = descriptor.field(number) else {
            return Err(Error::Malformed(format!(
                "field {number} is not declared by `{}`",
                descriptor.full_name()
            )));
        };
        check_value(field.kind(), field.name(), value)?;
    }

    for field in descriptor.fields() {
        match field.kind() {
            FieldKind::Oneof(arms) => {
                let set = arms
                    .iter()
                    .filter(|arm| message.get(arm.number()).is_some())
                    .count();
                if set > 1 {
                    return Err(Error::Malformed(format!(
                        "multiple arms of oneof `{}` are set",
                        field.name()
                    )));
                }
            }
            _ => {
                if field.is_required() && message.get(field.number()).is_none() {
                    return Err(Error::Malformed(format!(
                        "required field `{}` is not set",
                        field.name()
                    )));
                }
            }
        }
    }

    Ok(())
}

fn check_value(kind: &FieldKind, name: &str, value: &Value) -> Result<()> {
    match (kind, value) {
        (FieldKind::Bool, Value::Bool(_))
        | (FieldKind::Int, Value::Int(_))
        | (FieldKind::Uint, Value::Uint(_))
        | (FieldKind::Float, Value::Float(_))
        | (FieldKind::String, Value::String(_))
        | (FieldKind::Bytes, Value::Bytes(_))
        | (FieldKind::Enum(_), Value::Enum(_)) => Ok(()),
        // A null reference is structurally fine; whether it is legal in
        // its position is the walk's concern.
        (FieldKind::Message, Value::Null) => Ok(()),
        (FieldKind::Message, Value::Message(nested)) => check_well_formed(nested),
        (FieldKind::Repeated(element), Value::List(items)) => {
            for item in items {
                if !matches!(item, Value::Null) {
                    check_value(element, name, item)?;
                }
            }
            Ok(())
        }
        (FieldKind::Map { key, value: value_kind }, Value::Map(entries)) => {
            for (map_key, map_value) in entries {
                check_map_key(key, name, map_key)?;
                if !matches!(map_value, Value::Null) {
                    check_value(value_kind, name, map_value)?;
                }
            }
            Ok(())
        }
        // Unsupported kinds get their own rejection during the walk.
        (FieldKind::Group | FieldKind::Opaque, _) => Ok(()),
        (kind, value) => Err(Error::Malformed(format!(
            "field `{name}` is declared as {} but holds a {}",
            kind.name(),
            value.kind_name()
        ))),
    }
}

fn check_map_key(kind: &FieldKind, name: &str, key: &MapKey) -> Result<()> {
    let ok = matches!(
        (kind, key),
        (FieldKind::Bool, MapKey::Bool(_))
            | (FieldKind::Int, MapKey::Int(_))
            | (FieldKind::Uint, MapKey::Uint(_))
            | (FieldKind::String, MapKey::String(_))
    );
    if ok {
        Ok(())
    } else {
        Err(Error::Malformed(format!(
            "map field `{name}` has a key that does not match its declared {} key kind",
            kind.name()
        )))
    }
}
