use std::collections::HashMap;

use flowfield_ipfix::FieldType;

/// Column type for types without a mapping.
pub const CLICKHOUSE_FALLBACK: &str = "String";
/// Avro branch for types without a mapping.
pub const AVRO_FALLBACK: &str = "string";

// ════════════════════════════════════════════════════════════════
//  ClickHouse
// ════════════════════════════════════════════════════════════════

/// `FieldType -> ClickHouse column type`. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ClickHouseTypes {
    types: HashMap<FieldType, String>,
}

impl ClickHouseTypes {
    /// Default table. `timezone` is attached to the `DateTime`/`DateTime64`
    /// types when given.
    pub fn new(timezone: Option<&str>) -> Self {
        let timezone = timezone.map(escape_ch_string);
        let datetime = |precision: Option<u8>| match (precision, timezone.as_deref()) {
            (None, None) => "DateTime".to_string(),
            (None, Some(tz)) => format!("DateTime('{tz}')"),
            (Some(p), None) => format!("DateTime64({p})"),
            (Some(p), Some(tz)) => format!("DateTime64({p}, '{tz}')"),
        };

        let types = HashMap::from([
            (FieldType::Uint8, "UInt8".to_string()),
            (FieldType::Uint16, "UInt16".to_string()),
            (FieldType::Uint32, "UInt32".to_string()),
            (FieldType::Uint64, "UInt64".to_string()),
            (FieldType::Int8, "Int8".to_string()),
            (FieldType::Int16, "Int16".to_string()),
            (FieldType::Int32, "Int32".to_string()),
            (FieldType::Int64, "Int64".to_string()),
            (FieldType::Float32, "Float32".to_string()),
            (FieldType::Float64, "Float64".to_string()),
            (FieldType::Boolean, "Bool".to_string()),
            (FieldType::MacAddress, "String".to_string()),
            (FieldType::OctetArray, "String".to_string()),
            (FieldType::String, "String".to_string()),
            (FieldType::DateTimeSeconds, datetime(None)),
            (FieldType::DateTimeMilliseconds, datetime(Some(3))),
            (FieldType::DateTimeMicroseconds, datetime(Some(6))),
            (FieldType::DateTimeNanoseconds, datetime(Some(9))),
            (FieldType::Ipv4Address, "IPv4".to_string()),
            (FieldType::Ipv6Address, "IPv6".to_string()),
        ]);
        Self { types }
    }

    pub fn with_override(
        mut self,
        field_type: FieldType,
        column_type: impl Into<String>,
    ) -> Self {
        self.types.insert(field_type, column_type.into());
        self
    }

    pub fn column_type(&self, field_type: FieldType) -> &str {
        match self.types.get(&field_type) {
            Some(t) => t.as_str(),
            None => {
                tracing::debug!(
                    %field_type,
                    fallback = CLICKHOUSE_FALLBACK,
                    "no clickhouse mapping"
                );
                CLICKHOUSE_FALLBACK
            }
        }
    }
}

/// Escapes a value for a single-quoted ClickHouse string literal.
fn escape_ch_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

impl Default for ClickHouseTypes {
    fn default() -> Self {
        Self::new(None)
    }
}

// ════════════════════════════════════════════════════════════════
//  Avro
// ════════════════════════════════════════════════════════════════

/// `FieldType -> Avro primitive`. Every column is emitted as the
/// nullable union `["null", primitive]`.
///
/// 64-bit unsigned values and sub-second timestamps map to `string`:
/// Avro has no unsigned `long`.
#[derive(Debug, Clone)]
pub struct AvroTypes {
    types: HashMap<FieldType, String>,
}

impl AvroTypes {
    pub fn new() -> Self {
        let types = [
            (FieldType::Uint8, "int"),
            (FieldType::Uint16, "int"),
            (FieldType::Uint32, "long"),
            (FieldType::Uint64, "string"),
            (FieldType::Int8, "int"),
            (FieldType::Int16, "int"),
            (FieldType::Int32, "int"),
            (FieldType::Int64, "long"),
            (FieldType::Float32, "float"),
            (FieldType::Float64, "double"),
            (FieldType::Boolean, "boolean"),
            (FieldType::MacAddress, "string"),
            (FieldType::OctetArray, "string"),
            (FieldType::String, "string"),
            (FieldType::DateTimeSeconds, "long"),
            (FieldType::DateTimeMilliseconds, "string"),
            (FieldType::DateTimeMicroseconds, "string"),
            (FieldType::DateTimeNanoseconds, "string"),
            (FieldType::Ipv4Address, "string"),
            (FieldType::Ipv6Address, "string"),
        ]
        .into_iter()
        .map(|(t, avro)| (t, avro.to_string()))
        .collect();
        Self { types }
    }

    pub fn with_override(mut self, field_type: FieldType, avro_type: impl Into<String>) -> Self {
        self.types.insert(field_type, avro_type.into());
        self
    }

    pub fn primitive(&self, field_type: FieldType) -> &str {
        match self.types.get(&field_type) {
            Some(t) => t.as_str(),
            None => {
                tracing::debug!(%field_type, fallback = AVRO_FALLBACK, "no avro mapping");
                AVRO_FALLBACK
            }
        }
    }

    pub fn nullable_union(&self, field_type: FieldType) -> Vec<String> {
        vec!["null".to_string(), self.primitive(field_type).to_string()]
    }
}

impl Default for AvroTypes {
    fn default() -> Self {
        Self::new()
    }
}
