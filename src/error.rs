//! Error types for medalwatch.

use thiserror::Error;

/// The main error type for medalwatch.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (mount writes, config and log files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The feed could not be reached or answered with a non-success status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The feed answered, but the body is not a valid payload.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The payload is well formed but lists no athletes.
    #[error("No athlete data in payload")]
    EmptyData,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error belongs to a single poll cycle.
    ///
    /// Poll failures are caught at the poll boundary and never stop the loop.
    pub fn is_poll_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Parse(_) | Self::EmptyData)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_failures() {
        assert!(Error::transport("down").is_poll_failure());
        assert!(Error::parse("bad json").is_poll_failure());
        assert!(Error::EmptyData.is_poll_failure());
        assert!(!Error::config("missing").is_poll_failure());
    }

    #[test]
    fn test_json_error_is_parse() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
