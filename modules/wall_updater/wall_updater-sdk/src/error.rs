//! Wall updater error types.
//!
//! Transport-agnostic classification of every way an update call can fail.
//! None of these are retried by the updater itself.

use std::fmt;

use thiserror::Error;

/// Why a call to the remote wall service failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFailure {
    /// The service answered with a status other than 200.
    NonSuccessStatus,
    /// The service answered 200 but the body is not JSON.
    InvalidResponseBody,
    /// The service answered 200 with `data.attributes.success == false`.
    Rejected,
    /// The request never completed (connect, timeout, body read).
    Transport,
}

impl UpdateFailure {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NonSuccessStatus => "non-200 status",
            Self::InvalidResponseBody => "invalid response body",
            Self::Rejected => "update rejected by server",
            Self::Transport => "transport failure",
        }
    }
}

impl fmt::Display for UpdateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for wall updater operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WallUpdaterError {
    /// The update model (or tool arguments) failed type or enum validation.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// No credential could be resolved for the call.
    #[error("authentication error: {message}")]
    Auth { message: String },

    /// Deployment misconfiguration.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The remote wall service did not accept the update.
    #[error("wall update failed: {failure}{}{}", format_status(.status), format_detail(.detail))]
    Update {
        failure: UpdateFailure,
        status: Option<u16>,
        detail: Option<String>,
    },
}

#[allow(clippy::ref_option)] // thiserror passes fields by reference
fn format_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

#[allow(clippy::ref_option)]
fn format_detail(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl WallUpdaterError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an authentication error.
    #[must_use]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an update error.
    #[must_use]
    pub fn update(failure: UpdateFailure, status: Option<u16>, detail: Option<String>) -> Self {
        Self::Update {
            failure,
            status,
            detail,
        }
    }

    /// The updater never retries. A caller that wants a retry re-invokes the
    /// whole operation, credential resolution included.
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        false
    }

    /// HTTP status reported by the remote service, when there was one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Update { status, .. } => *status,
            _ => None,
        }
    }

    /// Failure class for update errors.
    #[must_use]
    pub fn update_failure(&self) -> Option<UpdateFailure> {
        match self {
            Self::Update { failure, .. } => Some(*failure),
            _ => None,
        }
    }
}
