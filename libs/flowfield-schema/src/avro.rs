use flowfield_ipfix::InfoModel;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::mapping::AvroTypes;
use crate::SchemaOptions;

/// Avro record field. The element id is kept as the single alias so
/// consumers can match columns by id after a rename upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvroField {
    pub name: String,
    #[serde(rename = "type")]
    pub avro_type: Vec<String>,
    pub aliases: Vec<String>,
    pub default: serde_json::Value,
}

pub fn avro_fields(model: &InfoModel, types: &AvroTypes, opts: &SchemaOptions) -> Vec<AvroField> {
    model
        .iter_range(opts.enterprise_id, opts.field_ids.clone())
        .map(|el| AvroField {
            name: el.name.clone(),
            avro_type: types.nullable_union(el.field_type),
            aliases: vec![el.field_id.to_string()],
            default: serde_json::Value::Null,
        })
        .collect()
}

/// JSON array of fields, ready to paste into a record schema.
pub fn avro_fields_json(fields: &[AvroField], pretty: bool) -> Result<String, SchemaError> {
    let json = if pretty {
        serde_json::to_string_pretty(fields)?
    } else {
        serde_json::to_string(fields)?
    };
    Ok(json)
}

/// Wraps `fields` into a named record schema and checks that Avro accepts it.
pub fn avro_record_schema(
    name: &str,
    fields: &[AvroField],
) -> Result<serde_json::Value, SchemaError> {
    let schema = serde_json::json!({
        "type": "record",
        "name": name,
        "fields": fields,
    });
    apache_avro::Schema::parse(&schema)?;
    tracing::debug!(record = name, fields = fields.len(), "avro record schema validated");
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use flowfield_ipfix::{FieldType, InfoElement};

    use super::*;

    fn element(name: &str, field_id: u16, field_type: FieldType) -> InfoElement {
        InfoElement { name: name.into(), field_id, field_type }
    }

    fn model() -> InfoModel {
        InfoModel::from_elements([
            (0, element("octetDeltaCount", 1, FieldType::Uint64)),
            (0, element("protocolIdentifier", 4, FieldType::Uint8)),
            (0, element("flowEndSeconds", 151, FieldType::DateTimeSeconds)),
        ])
    }

    #[test]
    fn fields_serialize_as_flat_array() {
        let fields = avro_fields(&model(), &AvroTypes::default(), &SchemaOptions::default());
        let json: serde_json::Value =
            serde_json::from_str(&avro_fields_json(&fields, false).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {
                    "name": "octetDeltaCount",
                    "type": ["null", "string"],
                    "aliases": ["1"],
                    "default": null
                },
                {
                    "name": "protocolIdentifier",
                    "type": ["null", "int"],
                    "aliases": ["4"],
                    "default": null
                },
                {
                    "name": "flowEndSeconds",
                    "type": ["null", "long"],
                    "aliases": ["151"],
                    "default": null
                },
            ])
        );
    }

    #[test]
    fn compact_output_keeps_field_order() {
        let fields = avro_fields(&model(), &AvroTypes::default(), &SchemaOptions::default());
        let json = avro_fields_json(&fields[..1], false).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"[{"name":"octetDeltaCount","type":["null","string"],"#,
                r#""aliases":["1"],"default":null}]"#
            )
        );
    }

    #[test]
    fn record_schema_is_valid_avro() {
        let fields =
            avro_fields(InfoModel::iana(), &AvroTypes::default(), &SchemaOptions::default());
        let schema = avro_record_schema("FlowRecord", &fields).unwrap();
        assert_eq!(schema["name"], "FlowRecord");
        assert_eq!(schema["fields"].as_array().unwrap().len(), fields.len());
    }

    #[test]
    fn record_schema_rejects_bad_primitive() {
        let types = AvroTypes::default().with_override(FieldType::Uint8, "uint8");
        let fields = avro_fields(&model(), &types, &SchemaOptions::default());
        assert!(matches!(
            avro_record_schema("FlowRecord", &fields),
            Err(SchemaError::Avro(_))
        ));
    }
}
