use thiserror::Error;

/// Errors that can be returned by client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached (DNS, connection refused, timeout).
    #[error("cannot reach server: {0}")]
    Connection(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A model-definition document was rejected as malformed.
    ///
    /// The server does not currently distinguish this case from other
    /// API failures, so create operations surface [`ClientError::Api`]
    /// instead; this variant is reserved for local validation.
    #[error("invalid model definition: {0}")]
    InvalidDefinition(String),

    /// A filesystem error, e.g. an unreadable modelfile.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The response body could not be decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Wrap a `reqwest` failure. Non-2xx statuses are mapped to
    /// [`ClientError::Api`] during response decoding, so everything
    /// arriving here is a transport-level failure.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        ClientError::Connection(err)
    }

    /// The HTTP status code, when this is an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
