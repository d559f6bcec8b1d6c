use thiserror::Error;

pub type Result<T> = std::result::Result<T, MintError>;

#[derive(Debug, Error)]
pub enum MintError {
    #[error("feature vector is empty")]
    EmptyInput,

    #[error("malformed base58: {0}")]
    MalformedBase58(String),

    #[error("checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },

    #[error("no acceptable fingerprint after {attempts} rotations")]
    HashSearchExhausted { attempts: u64 },

    #[error("template layout violated: {0}")]
    TemplateLayout(String),

    #[error("invalid feature data: {0}")]
    InvalidFeatureData(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
