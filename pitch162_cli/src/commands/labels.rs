//! The `labels` subcommand: fetch one page and show every table the locator
//! sees, with its footer labels and the mapping it would export.

use anyhow::{Context, Result};
use clap::Args;
use pitch162_lib::subjects::validate_subjects;
use pitch162_lib::{list_tables, scan_career_rows};

use super::ClientArgs;
use crate::output::{print_field_map, print_scan_summary, print_table_overview};

/// Arguments for the `labels` subcommand.
#[derive(Args)]
pub struct LabelsArgs {
    /// Player page URL
    pub url: String,

    #[command(flatten)]
    pub client: ClientArgs,
}

pub async fn run(args: &LabelsArgs) -> Result<()> {
    let url = validate_subjects(vec![args.url.clone()])?.remove(0);
    let client = args.client.build()?;
    let html = client
        .fetch_page(&url)
        .await
        .with_context(|| format!("failed to fetch {}", url))?;

    print_table_overview(&list_tables(&html));

    let scan = scan_career_rows(&html);
    print_scan_summary(&scan);
    match scan.best() {
        Some(fields) => print_field_map(fields),
        None => eprintln!("No 162 Game Avg row found on {}", url),
    }
    Ok(())
}
