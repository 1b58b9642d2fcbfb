use std::fmt;

/// Result type for phishscope-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching or normalizing analysis results
#[derive(Debug)]
pub enum Error {
    /// Network-level failure (unreachable host, connection reset, timeout)
    Transport(reqwest::Error),

    /// The service answered with a non-2xx status
    Status(u16),

    /// Response body did not match the expected JSON shape
    Json(reqwest::Error),

    /// A record carried a phishing verdict outside the three-literal contract.
    /// Never coerced to a default tier; fails the whole batch.
    UnknownRiskTier { index: usize, label: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Transport error: {}", err),
            Error::Status(code) => write!(f, "Unexpected response status: {}", code),
            Error::Json(err) => write!(f, "Malformed response body: {}", err),
            Error::UnknownRiskTier { index, label } => write!(
                f,
                "Record {} carries unknown risk verdict {:?}",
                index, label
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) | Error::Json(err) => Some(err),
            Error::Status(_) | Error::UnknownRiskTier { .. } => None,
        }
    }
}
