use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubdomainError {
    #[error("Empty name")]
    Empty,

    #[error("Label `{0}` is too long")]
    TooLong(String),

    #[error("Invalid character `{ch}` in label `{label}`")]
    InvalidCharacter { label: String, ch: char },

    #[error("Label `{0}` starts with a hyphen")]
    LeadingHyphen(String),

    #[error("Label `{0}` ends with a hyphen")]
    TrailingHyphen(String),

    #[error("Name `{0}` has no parent domain")]
    MissingParent(String),

    #[error("Name `{0}` is too long")]
    NameTooLong(String),

    #[error("Missing modal parameter `{0}`")]
    MissingParam(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure reported by one of the external collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Transaction rejected: {0}")]
    Rejected(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        ServiceError::Encoding(e.to_string())
    }
}
