use thiserror::Error;

/// Failures of the profile fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Credential or settings required to reach the backend are absent.
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("generation request failed: {0}")]
    Transport(String),
    #[error("generation backend returned HTTP {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("generation backend returned no content")]
    EmptyResponse,
    #[error("generated profile could not be parsed: {0}")]
    Malformed(String),
}

impl ServiceError {
    pub fn missing_credential(env_var: &str) -> Self {
        Self::Configuration(format!(
            "API key is missing; set {env_var} in the environment and retry"
        ))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Short machine-friendly tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Transport(_) => "transport",
            Self::Backend { .. } => "backend",
            Self::EmptyResponse => "empty_response",
            Self::Malformed(_) => "malformed",
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset has no categories")]
    Empty,
    #[error("category '{0}' has no entries")]
    EmptyCategory(String),
    #[error("category '{0}' is defined more than once")]
    DuplicateCategory(String),
    #[error("category label must not be blank")]
    BlankLabel,
    #[error("entry in category '{0}' has a blank name")]
    BlankEntryName(String),
    #[error("invalid dataset file: {0}")]
    Parse(#[from] serde_json::Error),
}
