//! Thin HTTP client for Baseball-Reference player pages.
//!
//! Builds a single `reqwest::Client` with browser-like default headers and
//! returns raw page markup. Parsing lives in `pitch162_lib`.

mod client;
mod errors;
mod user_agent;
pub use self::client::{Client, ClientConfig};
pub use self::errors::Error;
pub use self::user_agent::DEFAULT_USER_AGENT;
