//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Error type for all Buxfer API operations.
///
/// Variants map one-to-one onto the failure classes an operation handler has
/// to distinguish: caller input problems, credential absence, transport
/// failures, decode failures, and API-level rejections that arrive over a
/// successful HTTP exchange.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ClientError {
    /// Caller input is missing a required field. Raised before any network
    /// activity.
    #[error("{0}")]
    Validation(String),

    /// No credential is configured. Checked on every call, not only at
    /// startup, so a process started without a token degrades to explicit
    /// per-call errors.
    #[error("BUXFER_TOKEN environment variable not set")]
    MissingCredential,

    /// Internal misuse: only GET and POST are part of the upstream contract.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The upstream did not respond within the request timeout.
    #[error("Request to Buxfer API timed out")]
    Timeout,

    /// The upstream returned a non-success HTTP status.
    #[error("Buxfer API returned HTTP status {status}")]
    Transport { status: u16 },

    /// The response body was not valid JSON.
    #[error("Failed to decode Buxfer API response: {0}")]
    Decode(String),

    /// HTTP succeeded but the embedded envelope status signals an API-level
    /// rejection.
    #[error("Buxfer API error: {0}")]
    Api(String),

    /// HTTP and decode succeeded but the expected payload keys are absent.
    #[error("Unexpected response format from Buxfer API: {0}")]
    UnexpectedShape(String),

    /// Network-level failure (DNS resolution, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),
}

/// Result type alias for Buxfer API operations.
pub type Result<T> = std::result::Result<T, ClientError>;
