use flowfield_ipfix::InfoModel;
use flowfield_schema::clickhouse_columns;

use crate::config::Effective;
use crate::error::SchemaGenError;

pub fn run(eff: &Effective) -> Result<(), SchemaGenError> {
    let lines = clickhouse_columns(InfoModel::iana(), &eff.clickhouse, &eff.options);
    tracing::info!(columns = lines.len(), "generated clickhouse columns");
    super::write_lines(&lines)?;
    Ok(())
}
