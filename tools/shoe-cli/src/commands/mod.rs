//! CLI command implementations.

pub mod config;
pub mod render;
pub mod variant;

use anyhow::{Context as _, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand, ValueEnum};

use shoe_catalog::{FixedClock, ShoeListing};

use crate::context::Context;

/// Output format of the render command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Card markup.
    Html,
    /// Card view trees.
    Json,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// JSON file with one listing or an array of listings.
    pub input: String,

    /// Render as of this date (YYYY-MM-DD) instead of now.
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Wrap the cards in a full HTML page.
    #[arg(long)]
    pub page: bool,

    /// Page title used with --page.
    #[arg(long, default_value = "Shoes")]
    pub title: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = RenderFormat::Html)]
    pub format: RenderFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the variant command.
#[derive(Args)]
pub struct VariantArgs {
    /// JSON file with one listing or an array of listings.
    pub input: String,

    /// Classify as of this date (YYYY-MM-DD) instead of now.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default config file in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the path of the config file in use.
    Path,
}

/// Read and validate listings from a JSON file.
pub async fn load_listings(ctx: &Context, input: &str) -> Result<Vec<ShoeListing>> {
    let path = ctx.resolve_path(input);
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read listings: {}", path.display()))?;

    ShoeListing::parse_many(&content, ctx.config.card.currency)
        .with_context(|| format!("Invalid listings in {}", path.display()))
}

/// One clock for the whole run, so every card sees the same "now".
pub fn run_clock(today: Option<NaiveDate>) -> FixedClock {
    match today {
        Some(date) => FixedClock::on_date(date),
        None => FixedClock(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoe_catalog::{Clock, Currency};

    const LISTING: &str = r#"{"slug":"hi-tops","name":"Hi-Tops","imageSrc":"/h.jpg",
        "price":5000,"releaseDate":"2024-05-20","numOfColors":2}"#;

    #[test]
    fn test_run_clock_pins_today() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let clock = run_clock(Some(date));
        assert_eq!(clock.now(), date.and_hms_opt(0, 0, 0).unwrap().and_utc());
        assert_eq!(clock.now(), clock.now());
    }

    #[tokio::test]
    async fn test_load_listings_uses_config_currency() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shoes.json"), LISTING).unwrap();

        let mut ctx = Context::in_dir(dir.path());
        ctx.config.card.currency = Currency::EUR;
        let listings = load_listings(&ctx, "shoes.json").await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].price.current().currency, Currency::EUR);
    }

    #[tokio::test]
    async fn test_load_listings_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::in_dir(dir.path());

        let err = load_listings(&ctx, "nope.json").await.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Failed to read listings:"));
        assert!(message.contains("nope.json"));
    }

    #[tokio::test]
    async fn test_load_listings_invalid_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bad.json"),
            LISTING.replace("2024-05-20", "someday"),
        )
        .unwrap();
        let ctx = Context::in_dir(dir.path());

        let err = load_listings(&ctx, "bad.json").await.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Invalid listings in"));
        assert!(message.contains("bad.json"));
        assert!(message.contains("Invalid release date: someday"));
    }
}
