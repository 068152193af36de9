use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Attribute not found: {0}")]
    AttributeNotFound(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid value '{value}' for attribute '{attr}' (expected one of: {expected})")]
    InvalidValue {
        attr: String,
        value: String,
        expected: String,
    },

    #[error("Invalid filter expression: {0}")]
    InvalidExpression(String),

    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SolidError>;
