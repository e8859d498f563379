//! Error types for the object hasher.

use thiserror::Error;

/// Hashing error type. Every variant is a hard failure of the whole hash
/// call; no partial digest is ever returned.
#[derive(Debug, Error)]
pub enum Error {
    /// Pre-hash validation rejected the message.
    #[error("message is not well-formed: {0}")]
    Malformed(String),

    /// The message carries unrecognized fields.
    #[error("messages with unknown fields cannot be hashed reliably")]
    UnknownFields,

    /// The message type declares an extension range.
    #[error("extendable message `{0}` cannot be hashed reliably")]
    Extendable(String),

    /// An opaque raw-bytes field is set.
    #[error("raw message fields are not supported (field `{0}`)")]
    OpaqueField(String),

    /// A `required` field is set. Required fields break backwards
    /// compatibility: removing one changes the hashability of old data.
    #[error("required fields are not allowed (field `{0}`)")]
    RequiredField(String),

    /// A field with a schema-declared custom default is declared.
    #[error("fields with explicit default values are not allowed (field `{0}`)")]
    ExplicitDefault(String),

    /// A well-known type without a registered handler.
    #[error("unsupported well-known type `{0}`")]
    UnknownWellKnownType(String),

    /// A null message inside a repeated field.
    #[error("got a null message in a repeated field, which is invalid")]
    NullInList,

    /// A null message as a map value.
    #[error("got a null message in a map field, which is invalid")]
    NullInMap,

    /// A selected one-of arm holding a null message.
    #[error("got a null message as the value of oneof arm `{0}`, which is invalid")]
    NullOneof(String),

    /// A field kind outside the set the engine understands.
    #[error("unsupported field type `{kind}` (field `{field}`)")]
    UnsupportedFieldType {
        kind: &'static str,
        field: String,
    },

    /// Float normalization broke an invariant. Does not occur for valid
    /// IEEE-754 inputs.
    #[error("could not normalize float: {0}")]
    Normalization(f64),

    /// A collaborator panic trapped at the entry point.
    #[error("internal fault: {0}")]
    Internal(String),
}

/// The coarse failure categories, one per rejection class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Pre-hash validation rejected the message.
    MalformedInput,
    /// A construct that cannot be hashed stably.
    UnsupportedConstruct,
    /// A null reference where a message is mandatory.
    InvalidNull,
    /// A field kind outside the supported set.
    UnsupportedType,
    /// A float normalization invariant violation.
    NormalizationFailure,
    /// A trapped collaborator fault.
    InternalFault,
}

impl Error {
    /// The failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Malformed(_) => ErrorKind::MalformedInput,
            Error::UnknownFields
            | Error::Extendable(_)
            | Error::OpaqueField(_)
            | Error::RequiredField(_)
            | Error::ExplicitDefault(_)
            | Error::UnknownWellKnownType(_) => ErrorKind::UnsupportedConstruct,
            Error::NullInList | Error::NullInMap | Error::NullOneof(_) => ErrorKind::InvalidNull,
            Error::UnsupportedFieldType { .. } => ErrorKind::UnsupportedType,
            Error::Normalization(_) => ErrorKind::NormalizationFailure,
            Error::Internal(_) => ErrorKind::InternalFault,
        }
    }
}

/// Result type for hashing operations.
pub type Result<T> = std::result::Result<T, Error>;
