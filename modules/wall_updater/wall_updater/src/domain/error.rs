use wall_updater_sdk::{UpdateFailure, WallUpdaterError};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid update: {0}")]
    Validation(String),

    #[error("Missing Padlet JWT token")]
    MissingCredential,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected status {status}")]
    NonSuccessStatus { status: u16, body: String },

    #[error("Response body is not JSON: {0}")]
    InvalidResponseBody(String),

    #[error("Update rejected by server")]
    Rejected,

    #[error("Transport error: {0}")]
    Transport(String),
}

impl DomainError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}

impl From<DomainError> for WallUpdaterError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(message) => Self::validation(message),
            DomainError::MissingCredential => Self::auth("missing credential"),
            DomainError::Config(message) => Self::config(message),
            DomainError::NonSuccessStatus { status, body } => {
                let detail = (!body.is_empty()).then_some(body);
                Self::update(UpdateFailure::NonSuccessStatus, Some(status), detail)
            }
            DomainError::InvalidResponseBody(detail) => Self::update(
                UpdateFailure::InvalidResponseBody,
                Some(200),
                Some(detail),
            ),
            DomainError::Rejected => Self::update(UpdateFailure::Rejected, Some(200), None),
            DomainError::Transport(detail) => {
                Self::update(UpdateFailure::Transport, None, Some(detail))
            }
        }
    }
}
