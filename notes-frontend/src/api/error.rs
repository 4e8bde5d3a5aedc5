use reqwest::StatusCode;

/// Failures of a single API call.
///
/// Error payloads the service reports inside a JSON body (`{"error": ...}`)
/// come back as ordinary response values, except for `get_note` where no
/// note can be returned and the message becomes [`ApiError::Service`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success status on an endpoint whose status is checked
    #[error("Failed to fetch notes ({status}): {body}")]
    Status { status: StatusCode, body: String },

    /// Connection refused, timeout, or any other failure to complete the exchange
    #[error("Request failed: {0}")]
    Transport(String),

    /// Body was not the JSON shape the endpoint promises
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// `{"error": ...}` reply where a resource was expected
    #[error("{0}")]
    Service(String),

    /// Local file could not be read for upload
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
