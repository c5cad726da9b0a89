//! Error types for the API client.

/// Errors that can occur when building requests or shaping responses.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An argument fell outside its enumerated or numeric contract.
    /// Raised before any network I/O is attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A network-level failure from the HTTP transport.
    #[error("network error")]
    Network(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered with an error payload instead of data.
    #[error("API error: {0}")]
    Api(String),
    /// The payload did not match the shape claimed by the datatype tag.
    /// No partial table is returned.
    #[error("failed to parse response: {0}")]
    Parse(String),
}
