#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("avro schema: {0}")]
    Avro(#[from] apache_avro::Error),
}
