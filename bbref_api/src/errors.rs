//! Error types for the page client.

/// Errors that can occur when fetching a page.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The page identifier is not an absolute http(s) URL.
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// A configured header value cannot be sent on the wire.
    #[error("invalid header value for {name}")]
    InvalidHeader { name: &'static str },
    /// Client construction, connection, timeout or body read failed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with anything other than 200 OK.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16 },
}
