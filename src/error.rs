//! Error types for policysim.
//!
//! The evaluation engine itself never fails: unrecognized enumerations fall
//! back to defaults. These errors exist for strict parsing and for the chat
//! relay, which talks to a remote service.

use thiserror::Error;

/// Validation errors raised by strict parsing of enumerated inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Category name not among the eleven known instruments.
    #[error("Unknown policy category: '{value}'")]
    UnknownPolicyCategory {
        /// Input as received.
        value: String,
    },

    /// Policy family name not recognized.
    #[error("Unknown policy type: '{value}'")]
    UnknownPolicyType {
        /// Input as received.
        value: String,
    },

    /// Market name not recognized.
    #[error("Unknown market type: '{value}'")]
    UnknownMarketType {
        /// Input as received.
        value: String,
    },
}

/// Errors reported by the chat relay.
///
/// Messages are phrased for direct display to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// Gateway URL or key missing from the environment.
    #[error("AI_API_KEY or AI_API_URL is not configured")]
    NotConfigured,

    /// Gateway answered 429.
    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    /// Gateway answered 402.
    #[error("AI usage limit reached. Please add credits to continue.")]
    CreditsExhausted,

    /// Any other non-OK gateway status.
    #[error("AI service temporarily unavailable (status {status})")]
    Upstream {
        /// HTTP status code.
        status: u16,
    },

    /// Response carried no body.
    #[error("No response body")]
    EmptyBody,

    /// Transport failure talking to the gateway.
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Underlying error text.
        message: String,
    },

    /// Request body could not be serialized.
    #[error("Failed to serialize request: {message}")]
    SerializationFailed {
        /// Underlying error text.
        message: String,
    },
}

impl RelayError {
    /// Maps a non-OK upstream HTTP status to a relay error.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            429 => Self::RateLimited,
            402 => Self::CreditsExhausted,
            _ => Self::Upstream { status },
        }
    }
}

/// Top-level error type for policysim.
#[derive(Debug, Error)]
pub enum PolicySimError {
    /// Strict parsing failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Chat relay failed.
    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    /// Unexpected internal failure.
    #[error("Internal error: {message}")]
    Internal {
        /// Underlying error text.
        message: String,
    },
}

impl PolicySimError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a relay error.
    #[must_use]
    pub const fn is_relay(&self) -> bool {
        matches!(self, Self::Relay(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    /// Returns true if retrying the same request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Relay(e) => match e {
                RelayError::RateLimited | RelayError::ConnectionFailed { .. } => true,
                RelayError::Upstream { status } => *status >= 500,
                _ => false,
            },
            Self::Internal { .. } => false,
        }
    }
}

/// Result type alias for policysim operations.
pub type PolicySimResult<T> = Result<T, PolicySimError>;
