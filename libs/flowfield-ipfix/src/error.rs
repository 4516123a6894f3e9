use crate::field_type::FieldType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Fixed-width field without reduced-size encoding arrived shorter
    /// than its canonical width.
    #[error("{field_type}: {len} byte(s) on the wire, expected {expected}")]
    Truncated {
        field_type: FieldType,
        len: usize,
        expected: usize,
    },
}

/// Name that is not an IANA abstract data type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type name: {0}")]
pub struct ParseFieldTypeError(pub String);
