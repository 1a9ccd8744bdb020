use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Message shown to the user for any load failure. Details go to the log.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load data. Make sure the JSON files are in the configured location.";

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Which of the two documents a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Roster,
    Trips,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Roster => write!(f, "student roster"),
            Resource::Trips => write!(f, "field trip"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} from {url}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {resource} data: {source}")]
    Parse {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    pub fn from_status(url: &str, status: reqwest::StatusCode, body: &str) -> Self {
        LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: Self::truncate_body(body),
        }
    }
}
