use thiserror::Error;

/// Top-level error type for the `cf-client` crate.
///
/// Every operation on a resource client returns this type. Validation
/// failures are raised before any request leaves the process; everything
/// else describes what happened on the wire.
#[derive(Debug, Error)]
pub enum Error {
    // ── Validation ──────────────────────────────────────────────────
    /// The request was rejected locally by its `Validate` impl.
    #[error("Request is invalid: {}", .messages.join(", "))]
    Validation { messages: Vec<String> },

    // ── Authentication ──────────────────────────────────────────────
    /// The token provider failed, or produced a value that is not a
    /// usable header.
    #[error("Token unavailable: {message}")]
    Token { message: String },

    /// HTTP 401 from either API root.
    #[error("Unauthorized -- the bearer token was rejected")]
    Unauthorized,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-success status from the platform, with whatever error body it sent.
    #[error("API error (HTTP {status}): {description}")]
    Api {
        status: u16,
        /// Platform error code (e.g. `CF-RouteNotFound`), when the body carried one.
        code: Option<String>,
        description: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status carried by this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// The client never retries on its own; this is for callers that do.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => matches!(*status, 502..=504),
            _ => false,
        }
    }

    /// The local validation messages, if the request never left the process.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            Self::Validation { messages } => Some(messages),
            _ => None,
        }
    }
}
