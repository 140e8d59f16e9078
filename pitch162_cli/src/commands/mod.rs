//! CLI subcommand implementations.

pub mod labels;
pub mod scrape;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use pitch162_lib::bbref_api::{Client, ClientConfig, DEFAULT_USER_AGENT};

/// HTTP settings shared by every subcommand that fetches pages.
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Request timeout in seconds
    #[arg(long, env = "PITCH162_TIMEOUT", default_value = "25")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "PITCH162_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl ClientArgs {
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    pub fn build(&self) -> Result<Client> {
        Client::with_config(self.config()).context("failed to build HTTP client")
    }
}
