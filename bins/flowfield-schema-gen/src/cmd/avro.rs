use flowfield_ipfix::InfoModel;
use flowfield_schema::{avro_fields, avro_fields_json, avro_record_schema, SchemaError};

use crate::config::{AvroArgs, Effective};
use crate::error::SchemaGenError;

pub fn run(eff: &Effective, args: &AvroArgs) -> Result<(), SchemaGenError> {
    let fields = avro_fields(InfoModel::iana(), &eff.avro, &eff.options);

    let json = match &args.record {
        None => avro_fields_json(&fields, args.pretty)?,
        Some(name) => {
            let schema = avro_record_schema(name, &fields)?;
            let rendered = if args.pretty {
                serde_json::to_string_pretty(&schema)
            } else {
                serde_json::to_string(&schema)
            };
            rendered.map_err(SchemaError::from)?
        }
    };
    tracing::info!(fields = fields.len(), record = ?args.record, "generated avro schema");

    super::write_lines(&[json])?;
    Ok(())
}
