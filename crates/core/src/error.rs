use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read schema file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Schema parsing error:\n{0}")]
    Parse(String),
    #[error("Malformed schema: {0}")]
    Malformed(#[from] MalformedSchemaError),
}

/// The schema parsed, but lacks something the explorer relies on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedSchemaError {
    #[error("schema has no query root type")]
    MissingQueryRoot,
    #[error("schema has no mutation root type")]
    MissingMutationRoot,
    #[error("{operation} root `{name}` is not an object type")]
    RootNotObject {
        operation: &'static str,
        name: String,
    },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
