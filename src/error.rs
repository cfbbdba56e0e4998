//! Error types and result handling for bestiary operations.
//!
//! All operations return a [`Result<T>`] which is a type alias for
//! `std::result::Result<T, Error>`.
//!
//! # Error Categories
//!
//! - **Network Errors**: Connection issues, timeouts, HTTP errors
//! - **Parse Errors**: Malformed pages or unexpected document structure
//! - **Not Found**: Missing pages or records
//! - **Rate Limiting**: When requests are throttled by the site
//! - **JSON Errors**: Serialization/deserialization failures
//! - **Bridge Errors**: Unknown methods and unavailable bridges
//!
//! Parse *misses* on individual fields are not errors: the corresponding
//! [`Monster`](crate::types::Monster) field is simply left `None`. Only a
//! wholly malformed document (for example an encounter page with zero monster
//! rows) is escalated to an `Err`.

use thiserror::Error;

/// Type alias for Results with bestiary errors.
///
/// # Examples
///
/// ```rust
/// use bestiary::{Result, Error};
///
/// fn example_operation() -> Result<String> {
///     Ok("Success".to_string())
/// }
///
/// fn example_with_error() -> Result<()> {
///     Err(Error::parse("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type for all bestiary operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Network-related errors from HTTP operations.
    ///
    /// Wraps errors from the underlying HTTP client (reqwest), including
    /// connection timeouts, DNS resolution failures, and transport errors.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTML/JSON parsing and data format errors.
    ///
    /// Used when a fetched document does not have the structure an
    /// extraction pathway requires, or when a bridge request carries
    /// malformed arguments.
    ///
    /// ```rust
    /// use bestiary::Error;
    ///
    /// let error = Error::parse("no monster rows found on encounter page");
    /// ```
    #[error("Parse error: {0}")]
    Parse(String),

    /// Resource not found errors.
    ///
    /// Used when a requested page or record cannot be located.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limiting responses from the content site.
    ///
    /// Optionally carries the number of seconds to wait before retrying, as
    /// provided by the site's `Retry-After` header.
    #[error("Rate limited, retry after {retry_after:?} seconds")]
    RateLimit { retry_after: Option<u64> },

    /// JSON serialization and deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A bridge request named a method that is not exposed.
    ///
    /// Unknown methods are a caller error and must never be silently
    /// ignored.
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// The bridge has no client behind it.
    ///
    /// Only the version probe is answered in that state; every other call
    /// fails fast with this error instead of hanging.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// Generic error messages.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a parse error with the given message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates a not found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Creates a rate limit error with optional retry-after time.
    ///
    /// The retry-after parameter typically comes from the `Retry-After`
    /// HTTP header.
    pub fn rate_limit(retry_after: Option<u64>) -> Self {
        Error::RateLimit { retry_after }
    }

    /// Creates an unknown-method error for a bridge request.
    pub fn unknown_method(method: impl Into<String>) -> Self {
        Error::UnknownMethod(method.into())
    }

    /// Creates an unavailable error for a disabled bridge.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Error::Unavailable(msg.into())
    }
}
