#[derive(thiserror::Error, Debug)]
pub enum LweError {
    /// An explicit vector assignment or codec input broke its contract.
    #[error("ValidationError: {0}")]
    ValidationError(String),
    /// Error when creating a ring with an invalid modulus (q <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// A decrypted bit group could not be turned back into text.
    #[error("DecodingError: {0}")]
    DecodingError(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Key file I/O: {0}")]
    Io(#[from] std::io::Error),
}
