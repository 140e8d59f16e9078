//! HTTP client for player pages.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;
use url::Url;

use crate::{user_agent, Error};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);

/// Settings applied once when the client is built.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: user_agent::DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Page client holding one reusable connection pool.
///
/// Header configuration (user agent, accept, accept-language, keep-alive)
/// is fixed at construction; every `fetch_page` call shares it.
pub struct Client {
    http: reqwest::Client,
}

impl Client {
    /// Creates a client with the default browser-like headers and a 25 second timeout.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from explicit settings.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| Error::InvalidHeader { name: "user-agent" })?,
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static(user_agent::ACCEPT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(user_agent::ACCEPT_LANGUAGE),
        );
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Fetches a page and returns its body.
    ///
    /// Only a 200 response counts as success; every other status and every
    /// transport failure is returned as an error.
    pub async fn fetch_page(&self, url: &str) -> Result<String, Error> {
        let parsed = parse_page_url(url)?;
        let resp = self.http.get(parsed).send().await.map_err(|e| {
            tracing::debug!("transport error for {}: {}", url, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::debug!("unexpected status {} for {}", status, url);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(resp.text().await?)
    }
}

fn parse_page_url(url: &str) -> Result<Url, Error> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {}", other),
        }),
    }
}
