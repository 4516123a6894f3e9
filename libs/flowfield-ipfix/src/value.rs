use std::borrow::Cow;
use std::fmt::{self, Write};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Serialize, Serializer};

/// Decoded field value.
///
/// The variant is chosen by the declared [`FieldType`](crate::FieldType),
/// never by the length observed on the wire. Byte-like variants borrow from
/// the input region; use [`Value::into_owned`] to detach.
///
/// Timestamps are kept as raw tick counts (`UInt32` seconds, `UInt64` for
/// milli/micro/nanoseconds); the unit is implied by the field type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Field present on the wire with zero length.
    Absent,
    Bool(bool),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(Cow<'a, str>),
    /// Opaque octets (`octetArray` and unknown elements).
    Bytes(Cow<'a, [u8]>),
    /// Hardware address, not length-checked.
    MacAddress(Cow<'a, [u8]>),
    /// IPv4 or IPv6 address bytes, not length-checked.
    IpAddress(Cow<'a, [u8]>),
}

impl Value<'_> {
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Absent => Value::Absent,
            Value::Bool(v) => Value::Bool(v),
            Value::UInt8(v) => Value::UInt8(v),
            Value::UInt16(v) => Value::UInt16(v),
            Value::UInt32(v) => Value::UInt32(v),
            Value::UInt64(v) => Value::UInt64(v),
            Value::Int8(v) => Value::Int8(v),
            Value::Int16(v) => Value::Int16(v),
            Value::Int32(v) => Value::Int32(v),
            Value::Int64(v) => Value::Int64(v),
            Value::Float32(v) => Value::Float32(v),
            Value::Float64(v) => Value::Float64(v),
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Bytes(b) => Value::Bytes(Cow::Owned(b.into_owned())),
            Value::MacAddress(b) => Value::MacAddress(Cow::Owned(b.into_owned())),
            Value::IpAddress(b) => Value::IpAddress(Cow::Owned(b.into_owned())),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Widens any unsigned variant. Counters are read this way regardless
    /// of the width the exporter declared.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::UInt8(v) => Some(v.into()),
            Value::UInt16(v) => Some(v.into()),
            Value::UInt32(v) => Some(v.into()),
            Value::UInt64(v) => Some(v),
            _ => None,
        }
    }

    /// `None` unless this is an address of exactly 4 or 16 bytes.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        let Value::IpAddress(bytes) = self else {
            return None;
        };
        ip_from_bytes(bytes)
    }
}

fn ip_from_bytes(bytes: &[u8]) -> Option<IpAddr> {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return Some(IpAddr::V4(Ipv4Addr::from(octets)));
    }
    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        return Some(IpAddr::V6(Ipv6Addr::from(octets)));
    }
    None
}

fn write_hex(f: &mut impl Write, bytes: &[u8]) -> fmt::Result {
    f.write_str("0x")?;
    for b in bytes {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

fn write_mac(f: &mut impl Write, bytes: &[u8]) -> fmt::Result {
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            f.write_char(':')?;
        }
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::UInt8(v) => write!(f, "{v}"),
            Value::UInt16(v) => write!(f, "{v}"),
            Value::UInt32(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Int8(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::String(s) => f.write_str(s),
            Value::Bytes(b) => write_hex(f, b),
            Value::MacAddress(b) => write_mac(f, b),
            Value::IpAddress(b) => match ip_from_bytes(b) {
                Some(ip) => write!(f, "{ip}"),
                None => write_hex(f, b),
            },
        }
    }
}

/// JSON-friendly rendering: numbers and booleans natively, addresses and
/// octets as text, `Absent` as `null`.
impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent => serializer.serialize_none(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::UInt8(v) => serializer.serialize_u8(*v),
            Value::UInt16(v) => serializer.serialize_u16(*v),
            Value::UInt32(v) => serializer.serialize_u32(*v),
            Value::UInt64(v) => serializer.serialize_u64(*v),
            Value::Int8(v) => serializer.serialize_i8(*v),
            Value::Int16(v) => serializer.serialize_i16(*v),
            Value::Int32(v) => serializer.serialize_i32(*v),
            Value::Int64(v) => serializer.serialize_i64(*v),
            Value::Float32(v) => serializer.serialize_f32(*v),
            Value::Float64(v) => serializer.serialize_f64(*v),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(_) | Value::MacAddress(_) | Value::IpAddress(_) => {
                serializer.collect_str(self)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_addresses() {
        let v4 = Value::IpAddress(Cow::Borrowed(&[192, 0, 2, 1]));
        assert_eq!(v4.to_string(), "192.0.2.1");

        let mut v6 = [0u8; 16];
        v6[0] = 0x20;
        v6[1] = 0x01;
        v6[2] = 0x0d;
        v6[3] = 0xb8;
        v6[15] = 1;
        assert_eq!(Value::IpAddress(Cow::Borrowed(&v6)).to_string(), "2001:db8::1");

        let odd = Value::IpAddress(Cow::Borrowed(&[10, 0, 0]));
        assert_eq!(odd.to_string(), "0x0a0000");
        assert_eq!(odd.ip_addr(), None);

        let mac = Value::MacAddress(Cow::Borrowed(&[0x00, 0x1b, 0x21, 0xaa, 0xbb, 0xcc]));
        assert_eq!(mac.to_string(), "00:1b:21:aa:bb:cc");
    }

    #[test]
    fn serializes_to_collector_json() {
        let rendered = serde_json::to_value([
            Value::Absent,
            Value::Bool(true),
            Value::UInt64(u64::MAX),
            Value::Int8(-3),
            Value::String(Cow::Borrowed("eth0")),
            Value::Bytes(Cow::Borrowed(&[0xde, 0xad])),
            Value::IpAddress(Cow::Borrowed(&[10, 1, 2, 3])),
        ])
        .unwrap();
        assert_eq!(
            rendered,
            serde_json::json!([null, true, u64::MAX, -3, "eth0", "0xdead", "10.1.2.3"])
        );
    }

    #[test]
    fn as_u64_widens_unsigned_only() {
        assert_eq!(Value::UInt8(7).as_u64(), Some(7));
        assert_eq!(Value::UInt32(70_000).as_u64(), Some(70_000));
        assert_eq!(Value::Int32(7).as_u64(), None);
        assert_eq!(Value::Absent.as_u64(), None);
    }

    #[test]
    fn into_owned_preserves_content() {
        let buf = vec![1u8, 2, 3];
        let owned = Value::Bytes(Cow::Borrowed(&buf)).into_owned();
        drop(buf);
        assert_eq!(owned, Value::Bytes(Cow::Owned(vec![1, 2, 3])));
    }
}
