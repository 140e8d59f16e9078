//! The `scrape` subcommand: fetch every player page, then write the raw and
//! rounded CSV files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pitch162_lib::artifacts::DEFAULT_HTML_DIR;
use pitch162_lib::subjects::{load_default_subjects, load_subject_file, validate_subjects};
use pitch162_lib::{export, DelayRange, HtmlDump, Pipeline};

use super::ClientArgs;
use crate::output::print_run_summary;

/// Arguments for the `scrape` subcommand.
#[derive(Args)]
pub struct ScrapeArgs {
    /// Player page URL; repeat for several. Takes precedence over --urls-file
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// YAML file with a `urls` list. Defaults to the built-in list
    #[arg(long, env = "PITCH162_URLS_FILE")]
    pub urls_file: Option<PathBuf>,

    /// Directory for the two CSV files
    #[arg(long, env = "PITCH162_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Directory for raw page dumps
    #[arg(long, env = "PITCH162_HTML_DIR", default_value = DEFAULT_HTML_DIR)]
    pub html_dir: PathBuf,

    /// Do not save fetched pages
    #[arg(long)]
    pub no_html_dump: bool,

    /// Lower bound of the wait after each request, in seconds
    #[arg(long, env = "PITCH162_DELAY_MIN", default_value = "28")]
    pub delay_min_secs: f64,

    /// Upper bound of the wait after each request, in seconds
    #[arg(long, env = "PITCH162_DELAY_MAX", default_value = "45")]
    pub delay_max_secs: f64,

    #[command(flatten)]
    pub client: ClientArgs,
}

pub async fn run(args: &ScrapeArgs) -> Result<()> {
    let subjects = resolve_subjects(args)?;
    let delay = DelayRange::from_secs(args.delay_min_secs, args.delay_max_secs)?;

    let mut pipeline = Pipeline::new(args.client.build()?, delay);
    if !args.no_html_dump {
        let dump = HtmlDump::create(&args.html_dir).with_context(|| {
            format!("failed to create dump directory {}", args.html_dir.display())
        })?;
        pipeline = pipeline.with_html_dump(dump);
    }

    tracing::info!("scraping {} player pages", subjects.len());
    let output = pipeline.run(&subjects).await;

    let paths = export(&args.out_dir, &output.header(), &output.records)
        .with_context(|| format!("failed to write CSV files to {}", args.out_dir.display()))?;

    print_run_summary(&output);
    eprintln!("Wrote {} and {}", paths.raw.display(), paths.rounded.display());
    Ok(())
}

/// Explicit URLs, else the URL file, else the built-in list.
fn resolve_subjects(args: &ScrapeArgs) -> Result<Vec<String>> {
    let subjects = if !args.urls.is_empty() {
        validate_subjects(args.urls.clone())?
    } else if let Some(path) = &args.urls_file {
        load_subject_file(path)?
    } else {
        load_default_subjects()?
    };
    Ok(subjects)
}
