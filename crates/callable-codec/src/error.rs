#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("input is empty")]
    Empty,

    #[error("malformed input at line {line}, column {column}: {message}")]
    Malformed {
        line:    usize,
        column:  usize,
        message: String,
    },

    #[error("input does not match the expected shape: {0}")]
    Shape(String),
}

#[derive(Debug, thiserror::Error)]
#[error("failed to encode value: {0}")]
pub struct EncodeError(pub String);
