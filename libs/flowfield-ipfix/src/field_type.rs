use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseFieldTypeError;

// ════════════════════════════════════════════════════════════════
//  Field Type
// ════════════════════════════════════════════════════════════════

/// Abstract data type of an information element.
///
/// Serialized with the IANA abstract data type names (`unsigned64`,
/// `ipv4Address`, `dateTimeMilliseconds`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    #[serde(rename = "unsigned8")]
    Uint8,
    #[serde(rename = "unsigned16")]
    Uint16,
    #[serde(rename = "unsigned32")]
    Uint32,
    #[serde(rename = "unsigned64")]
    Uint64,
    #[serde(rename = "signed8")]
    Int8,
    #[serde(rename = "signed16")]
    Int16,
    #[serde(rename = "signed32")]
    Int32,
    #[serde(rename = "signed64")]
    Int64,
    Float32,
    Float64,
    Boolean,
    MacAddress,
    OctetArray,
    String,
    DateTimeSeconds,
    DateTimeMilliseconds,
    DateTimeMicroseconds,
    DateTimeNanoseconds,
    Ipv4Address,
    Ipv6Address,
    /// Catch-all for elements missing from the information model.
    /// Decoded as opaque bytes.
    Unknown,
}

impl FieldType {
    pub const ALL: [FieldType; 21] = [
        FieldType::Uint8,
        FieldType::Uint16,
        FieldType::Uint32,
        FieldType::Uint64,
        FieldType::Int8,
        FieldType::Int16,
        FieldType::Int32,
        FieldType::Int64,
        FieldType::Float32,
        FieldType::Float64,
        FieldType::Boolean,
        FieldType::MacAddress,
        FieldType::OctetArray,
        FieldType::String,
        FieldType::DateTimeSeconds,
        FieldType::DateTimeMilliseconds,
        FieldType::DateTimeMicroseconds,
        FieldType::DateTimeNanoseconds,
        FieldType::Ipv4Address,
        FieldType::Ipv6Address,
        FieldType::Unknown,
    ];

    /// Canonical wire width in bytes. `0` for variable-length types.
    pub const fn expected_width(self) -> usize {
        match self {
            FieldType::Boolean | FieldType::Uint8 | FieldType::Int8 => 1,
            FieldType::Uint16 | FieldType::Int16 => 2,
            FieldType::Uint32 | FieldType::Int32 | FieldType::Float32 => 4,
            FieldType::DateTimeSeconds => 4,
            FieldType::Uint64 | FieldType::Int64 | FieldType::Float64 => 8,
            FieldType::DateTimeMilliseconds
            | FieldType::DateTimeMicroseconds
            | FieldType::DateTimeNanoseconds => 8,
            FieldType::MacAddress => 6,
            FieldType::Ipv4Address => 4,
            FieldType::Ipv6Address => 16,
            FieldType::String | FieldType::OctetArray | FieldType::Unknown => 0,
        }
    }

    /// Unsigned counters that exporters may send narrower than declared
    /// (reduced-size encoding). Short input is left-padded with zeros.
    pub const fn is_paddable(self) -> bool {
        matches!(self, FieldType::Uint16 | FieldType::Uint32 | FieldType::Uint64)
    }

    /// IANA abstract data type name.
    pub const fn name(self) -> &'static str {
        match self {
            FieldType::Uint8 => "unsigned8",
            FieldType::Uint16 => "unsigned16",
            FieldType::Uint32 => "unsigned32",
            FieldType::Uint64 => "unsigned64",
            FieldType::Int8 => "signed8",
            FieldType::Int16 => "signed16",
            FieldType::Int32 => "signed32",
            FieldType::Int64 => "signed64",
            FieldType::Float32 => "float32",
            FieldType::Float64 => "float64",
            FieldType::Boolean => "boolean",
            FieldType::MacAddress => "macAddress",
            FieldType::OctetArray => "octetArray",
            FieldType::String => "string",
            FieldType::DateTimeSeconds => "dateTimeSeconds",
            FieldType::DateTimeMilliseconds => "dateTimeMilliseconds",
            FieldType::DateTimeMicroseconds => "dateTimeMicroseconds",
            FieldType::DateTimeNanoseconds => "dateTimeNanoseconds",
            FieldType::Ipv4Address => "ipv4Address",
            FieldType::Ipv6Address => "ipv6Address",
            FieldType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldType {
    type Err = ParseFieldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ParseFieldTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_catalog() {
        assert_eq!(FieldType::Boolean.expected_width(), 1);
        assert_eq!(FieldType::Int8.expected_width(), 1);
        assert_eq!(FieldType::Uint16.expected_width(), 2);
        assert_eq!(FieldType::Float32.expected_width(), 4);
        assert_eq!(FieldType::DateTimeSeconds.expected_width(), 4);
        assert_eq!(FieldType::DateTimeNanoseconds.expected_width(), 8);
        assert_eq!(FieldType::MacAddress.expected_width(), 6);
        assert_eq!(FieldType::Ipv6Address.expected_width(), 16);
        assert_eq!(FieldType::String.expected_width(), 0);
        assert_eq!(FieldType::OctetArray.expected_width(), 0);
        assert_eq!(FieldType::Unknown.expected_width(), 0);
    }

    #[test]
    fn only_unsigned_counters_are_paddable() {
        let paddable: Vec<_> = FieldType::ALL.into_iter().filter(|t| t.is_paddable()).collect();
        assert_eq!(paddable, [FieldType::Uint16, FieldType::Uint32, FieldType::Uint64]);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for t in FieldType::ALL {
            assert_eq!(t.name().parse::<FieldType>().unwrap(), t);
        }
        assert_eq!(
            "unsigned128".parse::<FieldType>(),
            Err(ParseFieldTypeError("unsigned128".to_string()))
        );
    }

    #[test]
    fn serde_uses_iana_names() {
        for t in FieldType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.name()));
            assert_eq!(serde_json::from_str::<FieldType>(&json).unwrap(), t);
        }
    }
}
