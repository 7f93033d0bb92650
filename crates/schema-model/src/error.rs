use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaModelError {
    #[error("unknown column type: {0}")]
    UnrecognizedColumnType(String),
}
