//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use orderscope_gateway::GatewayError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Empty identifier after trimming; no lookup is attempted.
    #[error("identifier required")]
    IdentifierRequired,

    /// Gateway error (converting from library)
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

impl CoreError {
    /// Whether this is an expected user-level outcome, used for log leveling.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Update this when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::IdentifierRequired => true,
            Self::Gateway(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
