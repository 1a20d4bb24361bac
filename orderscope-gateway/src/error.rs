use serde::{Deserialize, Serialize};

/// Unified error type for order gateway operations.
///
/// Variants map onto the failure classes the lookup flow distinguishes:
/// transport problems, non-success HTTP statuses, and malformed response
/// envelopes. All variants are serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GatewayError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, interrupted body read, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out at the socket level.
    ///
    /// No overall deadline is imposed on lookups; this only surfaces
    /// timeouts the transport itself reports.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The backend answered with a non-success HTTP status.
    Status {
        /// HTTP status code of the response. Named to stay clear of the
        /// serde tag key.
        status: u16,
    },

    /// The response decoded as JSON but the envelope is unusable: the
    /// success flag is false or the payload is absent.
    InvalidFormat,

    /// The response body could not be decoded into the order schema.
    Decode {
        /// Details about the decode failure.
        detail: String,
    },
}

impl GatewayError {
    /// Whether this failure is an expected user-level outcome (unknown
    /// identifier, unusable envelope), used for log leveling.
    ///
    /// `true` means log at `debug`/`warn`; `false` means the transport or
    /// the backend misbehaved and `error` is appropriate.
    /// **Update this when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::InvalidFormat)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => {
                write!(f, "network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "request timed out: {detail}")
            }
            Self::Status { status } => {
                write!(f, "order not found (status: {status})")
            }
            Self::InvalidFormat => {
                write!(f, "invalid response format")
            }
            Self::Decode { detail } => {
                write!(f, "invalid response body: {detail}")
            }
        }
    }
}

impl std::error::Error for GatewayError {}

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;
