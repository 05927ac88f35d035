use thiserror::Error;

#[derive(Error, Debug)]
pub enum PikdexError {
    #[error("Saved collection is malformed: {0}")]
    MalformedData(String),

    #[error("No data to export")]
    EmptyExport,

    #[error("Could not save collection: {0}")]
    Persistence(String),

    #[error("Unknown {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PikdexError>;
