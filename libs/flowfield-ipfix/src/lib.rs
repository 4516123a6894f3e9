//! Field value decoding for IPFIX / NetFlow v9 data records.
//!
//! A record parser hands over one field at a time: the raw bytes carried on
//! the wire and the [`FieldType`] resolved from the information model.
//! [`decode`] turns that pair into a typed [`Value`].

pub mod decode;
pub mod error;
pub mod field_type;
pub mod info_model;
pub mod value;

pub use decode::decode;
pub use error::{DecodeError, ParseFieldTypeError};
pub use field_type::FieldType;
pub use info_model::{DecodedField, ElementKey, InfoElement, InfoModel};
pub use value::Value;
