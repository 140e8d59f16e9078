//! Sequential scrape loop: fetch, dump, extract, assemble, wait.

use std::collections::BTreeSet;
use std::time::Duration;

use bbref_api::Client;
use rand::Rng;
use scraper::Html;

use crate::artifacts::HtmlDump;
use crate::bio::{display_name, parse_meta_bio};
use crate::career::CareerRowLocator;
use crate::error::Pitch162Error;
use crate::export::build_header;
use crate::record::{ErrorStatus, PitcherRecord};

/// Uniform random politeness delay slept after every fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayRange {
    min_secs: f64,
    max_secs: f64,
}

impl Default for DelayRange {
    /// 28 to 45 seconds; the site throttles faster clients.
    fn default() -> Self {
        Self {
            min_secs: 28.0,
            max_secs: 45.0,
        }
    }
}

impl DelayRange {
    /// Both bounds must convert to a `Duration` and be ordered.
    pub fn from_secs(min_secs: f64, max_secs: f64) -> Result<Self, Pitch162Error> {
        let convertible = |secs: f64| Duration::try_from_secs_f64(secs).is_ok();
        if !convertible(min_secs) || !convertible(max_secs) || min_secs > max_secs {
            return Err(Pitch162Error::InvalidDelay {
                min: min_secs,
                max: max_secs,
            });
        }
        Ok(Self { min_secs, max_secs })
    }

    /// Zero-length delay, for tests and single-page diagnostics.
    pub fn zero() -> Self {
        Self {
            min_secs: 0.0,
            max_secs: 0.0,
        }
    }

    pub fn sample(&self) -> Duration {
        if self.min_secs >= self.max_secs {
            return Duration::from_secs_f64(self.min_secs);
        }
        Duration::from_secs_f64(rand::thread_rng().gen_range(self.min_secs..=self.max_secs))
    }
}

/// Records from one run plus every stat field observed in them.
#[derive(Debug, Default)]
pub struct RunOutput {
    pub records: Vec<PitcherRecord>,
    pub stat_fields: BTreeSet<String>,
}

impl RunOutput {
    /// CSV header covering every observed stat field.
    pub fn header(&self) -> Vec<String> {
        build_header(&self.stat_fields)
    }

    pub fn count(&self, status: Option<ErrorStatus>) -> usize {
        self.records.iter().filter(|r| r.error == status).count()
    }
}

/// Owns the page client and drives the per-player loop.
pub struct Pipeline {
    client: Client,
    locator: CareerRowLocator,
    delay: DelayRange,
    html_dump: Option<HtmlDump>,
}

impl Pipeline {
    pub fn new(client: Client, delay: DelayRange) -> Self {
        Self {
            client,
            locator: CareerRowLocator::default(),
            delay,
            html_dump: None,
        }
    }

    /// Saves every fetched page under the dump directory.
    pub fn with_html_dump(mut self, dump: HtmlDump) -> Self {
        self.html_dump = Some(dump);
        self
    }

    /// Replaces the default `data-stat` translation used by the locator.
    pub fn with_locator(mut self, locator: CareerRowLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Processes every URL in order. Never fails: per-player problems are
    /// recorded on that player's row.
    pub async fn run(&self, urls: &[String]) -> RunOutput {
        let mut output = RunOutput::default();
        for (idx, url) in urls.iter().enumerate() {
            tracing::info!("[{}/{}] processing {}", idx + 1, urls.len(), url);
            let record = self.process(url).await;
            output.stat_fields.extend(record.stats.keys().cloned());
            output.records.push(record);

            let wait = self.delay.sample();
            tracing::debug!("sleeping {:.1}s", wait.as_secs_f64());
            tokio::time::sleep(wait).await;
        }
        output
    }

    /// Fetches and extracts one page without the trailing delay.
    pub async fn process(&self, url: &str) -> PitcherRecord {
        let html = match self.client.fetch_page(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("fetch failed for {}: {}", url, e);
                return PitcherRecord::fetch_failed(url);
            }
        };

        if let Some(dump) = &self.html_dump {
            match dump.save(url, &html) {
                Ok(path) => tracing::debug!("saved page to {}", path.display()),
                Err(e) => tracing::warn!("could not save page for {}: {}", url, e),
            }
        }

        let record = extract_record(url, &html, &self.locator);
        if record.error == Some(ErrorStatus::RowNotFound) {
            tracing::warn!("162 game avg row not found for {}", url);
        }
        record
    }
}

/// Parses a fetched page into a record.
pub fn extract_record(url: &str, html: &str, locator: &CareerRowLocator) -> PitcherRecord {
    let document = Html::parse_document(html);
    let name = display_name(&document);
    let bio = parse_meta_bio(&document);
    let stats = locator.locate(&document, url);
    PitcherRecord::assemble(url, &name, &bio, stats)
}
