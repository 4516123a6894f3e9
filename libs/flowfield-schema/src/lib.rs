//! Storage schema generation from the IPFIX information model.
//!
//! Emits ClickHouse column fragments, Avro field lists and ClickHouse
//! `RPATH_STRING` projections, one entry per element present in the model.

pub mod avro;
pub mod clickhouse;
pub mod error;
pub mod mapping;
pub mod naming;

use std::ops::RangeInclusive;

use flowfield_ipfix::info_model::IANA_ENTERPRISE_ID;

pub use avro::{AvroField, avro_fields, avro_fields_json, avro_record_schema};
pub use clickhouse::{clickhouse_columns, rpath_columns};
pub use error::SchemaError;
pub use mapping::{AvroTypes, ClickHouseTypes};
pub use naming::snake_case;

/// Which elements to emit and how to name the columns.
#[derive(Debug, Clone)]
pub struct SchemaOptions {
    /// Prepended to every snake-cased column name.
    pub prefix: String,
    pub enterprise_id: u32,
    pub field_ids: RangeInclusive<u16>,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            prefix: "ds_iana_".into(),
            enterprise_id: IANA_ENTERPRISE_ID,
            field_ids: 1..=491,
        }
    }
}

impl SchemaOptions {
    pub fn column_name(&self, element_name: &str) -> String {
        format!("{}{}", self.prefix, snake_case(element_name))
    }
}
