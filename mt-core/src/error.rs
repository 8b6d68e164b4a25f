//! Global error types for the Data API SDK.
//!
//! Every failure an SDK call can produce is a variant of `MtError`. Server
//! error envelopes and transport failures both surface as `Api`, the latter
//! with the fixed code `"-1"`.

use thiserror::Error;

use crate::constants::{TRANSPORT_ERROR_CODE, TRANSPORT_ERROR_MESSAGE};

/// Convenience type alias for Results using MtError.
pub type MtResult<T> = Result<T, MtError>;

/// Unified error type covering all error categories.
#[derive(Error, Debug)]
pub enum MtError {
    // -- Remote errors --
    /// The server answered with an `error` envelope, or the transport failed.
    #[error("api error {code}: {message}")]
    Api {
        /// Error code reported by the server (`"-1"` for transport failures).
        code: String,
        /// Human-readable message reported by the server.
        message: String,
    },

    /// The server rejected an authentication or token request.
    #[error("authentication failed ({code}): {message}")]
    AuthFailed {
        /// Error code reported by the server.
        code: String,
        /// Human-readable message reported by the server.
        message: String,
    },

    // -- Local guard rails --
    /// A session-dependent call was made with no active session.
    #[error("authentication precondition failed: {0}")]
    AuthPrecondition(String),

    /// The resource does not accept this verb through the generic path.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A multi-phase job did not complete within the configured phase cap.
    #[error("job did not complete within {0} phases")]
    PhaseLimitExceeded(u32),

    // -- Configuration errors --
    /// Failed to load or parse application configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// An unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MtError {
    /// Build an `Api` error from a server-reported code and message.
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        MtError::Api {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The generic error every transport-level failure collapses into.
    pub fn transport() -> Self {
        Self::api(TRANSPORT_ERROR_CODE, TRANSPORT_ERROR_MESSAGE)
    }

    /// Server-reported error code, if this error carries one.
    pub fn code(&self) -> Option<&str> {
        match self {
            MtError::Api { code, .. } | MtError::AuthFailed { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Server-reported message, if this error carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            MtError::Api { message, .. } | MtError::AuthFailed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Whether this is the generic transport failure.
    pub fn is_transport(&self) -> bool {
        self.code() == Some(TRANSPORT_ERROR_CODE)
    }

    /// Re-tag a server-reported `Api` error as `AuthFailed`. Transport
    /// failures and other variants pass through.
    pub fn into_auth_failure(self) -> Self {
        match self {
            MtError::Api { code, message } if code != TRANSPORT_ERROR_CODE => {
                MtError::AuthFailed { code, message }
            }
            other => other,
        }
    }
}

impl From<serde_json::Error> for MtError {
    fn from(e: serde_json::Error) -> Self {
        MtError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for MtError {
    fn from(e: toml::de::Error) -> Self {
        MtError::Config(e.to_string())
    }
}
