use flowfield_ipfix::InfoModel;
use flowfield_schema::rpath_columns;

use crate::config::Effective;
use crate::error::SchemaGenError;

pub fn run(eff: &Effective) -> Result<(), SchemaGenError> {
    let lines = rpath_columns(InfoModel::iana(), &eff.options);
    tracing::info!(columns = lines.len(), "generated rpath projections");
    super::write_lines(&lines)?;
    Ok(())
}
