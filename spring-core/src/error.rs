use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a spring check before it reaches a verdict.
#[derive(Debug, Error)]
pub enum SpringError {
    /// A required environment variable is absent or blank.
    #[error("{var} environment variable not set")]
    MissingConfig { var: &'static str },

    /// An environment variable is present but unusable.
    #[error("{var} has an invalid value: {reason}")]
    InvalidConfig { var: &'static str, reason: String },

    /// Connection, DNS or timeout failure.
    #[error("{context}: {source}")]
    Request {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The remote end answered with a non-2xx status.
    #[error("{context} failed with status {status}: {body}")]
    Status {
        context: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The provider body was not the JSON we expect.
    #[error("Failed to parse OpenWeather current JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize notification payload: {0}")]
    Encode(#[source] serde_json::Error),
}

impl SpringError {
    pub fn is_config(&self) -> bool {
        matches!(self, Self::MissingConfig { .. } | Self::InvalidConfig { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Request { .. } | Self::Status { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

pub type Result<T, E = SpringError> = std::result::Result<T, E>;

/// Cap an error body so a misbehaving endpoint can't flood the log.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
