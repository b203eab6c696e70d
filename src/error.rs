//! Error types for artic-table
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input (bad prompt count, out-of-range page, bad config)
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config file read)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// Transport-level failure talking to the catalog endpoint
    #[snafu(display("Network error: {source}"))]
    Network { source: reqwest::Error },

    /// Response body did not match the expected catalog shape
    #[snafu(display("Decode error: {source}"))]
    Decode { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Network { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Decode { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
