#[derive(Debug, thiserror::Error)]
pub enum SchemaGenError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("{0}")]
    Schema(#[from] flowfield_schema::SchemaError),

    #[error("output: {0}")]
    Io(#[from] std::io::Error),
}
