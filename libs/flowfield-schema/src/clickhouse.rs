use flowfield_ipfix::InfoModel;

use crate::mapping::ClickHouseTypes;
use crate::SchemaOptions;

/// One `CREATE TABLE` column fragment per element:
/// `ds_iana_octet_delta_count Nullable(UInt64),`
pub fn clickhouse_columns(
    model: &InfoModel,
    types: &ClickHouseTypes,
    opts: &SchemaOptions,
) -> Vec<String> {
    model
        .iter_range(opts.enterprise_id, opts.field_ids.clone())
        .map(|el| {
            format!(
                "{} Nullable({}),",
                opts.column_name(&el.name),
                types.column_type(el.field_type)
            )
        })
        .collect()
}

/// One projection per element, extracting the field from the first
/// data set of an Avro-decoded record:
/// `RPATH_STRING(DataSets[1], '/octetDeltaCount') as ds_iana_octet_delta_count,`
pub fn rpath_columns(model: &InfoModel, opts: &SchemaOptions) -> Vec<String> {
    model
        .iter_range(opts.enterprise_id, opts.field_ids.clone())
        .map(|el| {
            format!(
                "RPATH_STRING(DataSets[1], '/{}') as {},",
                el.name,
                opts.column_name(&el.name)
            )
        })
        .collect()
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
            (0, element("sourceIPv4Address", 8, FieldType::Ipv4Address)),
            (0, element("flowStartMilliseconds", 152, FieldType::DateTimeMilliseconds)),
            (0, element("mysteryBlob", 400, FieldType::Unknown)),
            (9, element("ciscoThing", 2, FieldType::Uint8)),
        ])
    }

    #[test]
    fn emits_nullable_columns_in_id_order() {
        let types = ClickHouseTypes::new(Some("UTC"));
        let lines = clickhouse_columns(&model(), &types, &SchemaOptions::default());
        assert_eq!(
            lines,
            [
                "ds_iana_octet_delta_count Nullable(UInt64),",
                "ds_iana_source_ipv4_address Nullable(IPv4),",
                "ds_iana_flow_start_milliseconds Nullable(DateTime64(3, 'UTC')),",
                "ds_iana_mystery_blob Nullable(String),",
            ]
        );
    }

    #[test]
    fn respects_id_range_and_prefix() {
        let opts = SchemaOptions {
            prefix: "f_".into(),
            field_ids: 2..=200,
            ..SchemaOptions::default()
        };
        let lines = clickhouse_columns(&model(), &ClickHouseTypes::default(), &opts);
        assert_eq!(
            lines,
            [
                "f_source_ipv4_address Nullable(IPv4),",
                "f_flow_start_milliseconds Nullable(DateTime64(3)),",
            ]
        );
    }

    #[test]
    fn emits_rpath_projections() {
        let opts = SchemaOptions { field_ids: 1..=8, ..SchemaOptions::default() };
        assert_eq!(
            rpath_columns(&model(), &opts),
            [
                "RPATH_STRING(DataSets[1], '/octetDeltaCount') as ds_iana_octet_delta_count,",
                "RPATH_STRING(DataSets[1], '/sourceIPv4Address') as ds_iana_source_ipv4_address,",
            ]
        );
    }

    #[test]
    fn iana_model_produces_columns() {
        let lines = clickhouse_columns(
            InfoModel::iana(),
            &ClickHouseTypes::default(),
            &SchemaOptions::default(),
        );
        assert_eq!(lines.len(), InfoModel::iana().len());
        assert_eq!(lines[0], "ds_iana_octet_delta_count Nullable(UInt64),");
    }
}
