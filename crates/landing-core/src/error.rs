//! Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site errors
#[derive(Error, Debug)]
pub enum SiteError {
    /// Session endpoint could not be reached
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// Session endpoint answered without a usable redirect URL
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Session endpoint answered with a non-success status
    #[error("Upstream rejected request ({status}): {message}")]
    UpstreamRejected { status: u16, message: String },

    /// Checkout request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Disclosure list constructed without items
    #[error("Disclosure list requires at least one item")]
    EmptyDisclosure,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SiteError {
    /// Stable tag for structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            SiteError::NetworkFailure(_) => "network_failure",
            SiteError::InvalidResponse(_) => "invalid_response",
            SiteError::UpstreamRejected { .. } => "upstream_rejected",
            SiteError::InvalidRequest(_) => "invalid_request",
            SiteError::EmptyDisclosure => "empty_disclosure",
            SiteError::Config(_) => "config",
        }
    }

    /// Whether trying the same activation again could succeed.
    ///
    /// The checkout flow never retries on its own; this only informs callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            SiteError::NetworkFailure(_) => true,
            SiteError::UpstreamRejected { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            SiteError::NetworkFailure(_) => "Could not reach the payment service. Please try again.",
            SiteError::UpstreamRejected { message, .. } => message,
            SiteError::InvalidResponse(_) => "Payment processing failed. Please try again.",
            SiteError::Config(_) => "Service configuration error.",
            _ => "An error occurred processing your request.",
        }
    }
}
