use std::borrow::Cow;

use crate::error::DecodeError;
use crate::field_type::FieldType;
use crate::value::Value;

/// Decodes one field's wire bytes (big-endian) according to its declared type.
///
/// - Empty input is [`Value::Absent`], except `String` which decodes to `""`.
/// - `Uint16`/`Uint32`/`Uint64` accept reduced-size encoding: short input is
///   left-padded with zeros, excess trailing bytes are ignored.
/// - Other fixed-width numeric and timestamp types read exactly their
///   canonical width; shorter input is [`DecodeError::Truncated`], excess is
///   ignored.
/// - Addresses and octet arrays pass through verbatim without length checks.
///
/// Pure: the input is never modified and no state is kept between calls.
pub fn decode(bytes: &[u8], field_type: FieldType) -> Result<Value<'_>, DecodeError> {
    if bytes.is_empty() {
        return Ok(match field_type {
            FieldType::String => Value::String(Cow::Borrowed("")),
            _ => Value::Absent,
        });
    }

    let value = match field_type {
        FieldType::Boolean => Value::Bool(bytes[0] & 1 == 1),
        FieldType::Uint8 => Value::UInt8(bytes[0]),
        FieldType::Int8 => Value::Int8(i8::from_be_bytes([bytes[0]])),

        FieldType::Uint16 => Value::UInt16(u16::from_be_bytes(padded(bytes))),
        FieldType::Uint32 => Value::UInt32(u32::from_be_bytes(padded(bytes))),
        FieldType::Uint64 => Value::UInt64(u64::from_be_bytes(padded(bytes))),

        FieldType::Int16 => Value::Int16(i16::from_be_bytes(exact(bytes, field_type)?)),
        FieldType::Int32 => Value::Int32(i32::from_be_bytes(exact(bytes, field_type)?)),
        FieldType::Int64 => Value::Int64(i64::from_be_bytes(exact(bytes, field_type)?)),
        FieldType::Float32 => Value::Float32(f32::from_be_bytes(exact(bytes, field_type)?)),
        FieldType::Float64 => Value::Float64(f64::from_be_bytes(exact(bytes, field_type)?)),

        FieldType::DateTimeSeconds => {
            Value::UInt32(u32::from_be_bytes(exact(bytes, field_type)?))
        }
        FieldType::DateTimeMilliseconds
        | FieldType::DateTimeMicroseconds
        | FieldType::DateTimeNanoseconds => {
            Value::UInt64(u64::from_be_bytes(exact(bytes, field_type)?))
        }

        FieldType::MacAddress => Value::MacAddress(Cow::Borrowed(bytes)),
        FieldType::Ipv4Address | FieldType::Ipv6Address => Value::IpAddress(Cow::Borrowed(bytes)),

        FieldType::String => {
            let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
            Value::String(String::from_utf8_lossy(&bytes[..end]))
        }

        FieldType::OctetArray | FieldType::Unknown => Value::Bytes(Cow::Borrowed(bytes)),
    };
    Ok(value)
}

/// Reduced-size encoding: right-align `bytes` in an `N`-byte buffer.
/// Input at least `N` long contributes its first `N` bytes.
fn padded<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    if bytes.len() >= N {
        buf.copy_from_slice(&bytes[..N]);
    } else {
        buf[N - bytes.len()..].copy_from_slice(bytes);
    }
    buf
}

/// First `N` bytes, or `Truncated` if there are fewer.
fn exact<const N: usize>(bytes: &[u8], field_type: FieldType) -> Result<[u8; N], DecodeError> {
    bytes
        .get(..N)
        .and_then(|head| <[u8; N]>::try_from(head).ok())
        .ok_or(DecodeError::Truncated {
            field_type,
            len: bytes.len(),
            expected: N,
        })
}
