mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pitch162")]
#[command(about = "Scrape 162-game average pitching lines from Baseball-Reference")]
struct Cli {
    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape every listed player page and write the two CSV files
    Scrape(Box<commands::scrape::ScrapeArgs>),
    /// Show the tables and footer labels found on one page
    Labels(commands::labels::LabelsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("pitch162={}", level).parse()?)
                .add_directive(format!("bbref_api={}", level).parse()?),
        )
        .with_target(false)
        .init();

    match &cli.command {
        Commands::Scrape(args) => commands::scrape::run(args.as_ref()).await?,
        Commands::Labels(args) => commands::labels::run(args).await?,
    }

    Ok(())
}
