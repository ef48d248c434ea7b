use thiserror::Error;

/// Main error type for ASN.1 runtime operations
#[derive(Error, Debug)]
pub enum AsnError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("ASN.1 encoding error: {0}")]
    Encoding(String),

    #[error("ASN.1 decoding error: {0}")]
    Decoding(String),

    #[error("Buffer error: {0}")]
    Buffer(String),

    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("Unsupported encoding rules: {0}")]
    UnsupportedEncodingRules(u8),

    #[error("Missing runtime behaviour: {0}")]
    Missing(&'static str),
}

/// Result type alias for ASN.1 runtime operations
pub type AsnResult<T> = Result<T, AsnError>;
