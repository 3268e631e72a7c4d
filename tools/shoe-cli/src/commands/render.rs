//! Render listings into card HTML.

use anyhow::{Context as _, Result};

use shoe_card::{render_grid, render_page, CardView, ShoeCard};

use super::variant::VariantCounts;
use super::{load_listings, run_clock, RenderArgs, RenderFormat};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let logger = ctx.logger("render");
    let listings = load_listings(ctx, &args.input).await?;

    logger
        .info_builder("Rendering cards")
        .field("input", args.input.as_str())
        .field_u64("listings", listings.len() as u64)
        .field_bool("page", args.page)
        .emit();

    let clock = run_clock(args.today);
    let card = ShoeCard::new(ctx.config.card_options());
    let views: Vec<CardView> = listings
        .iter()
        .map(|listing| card.view(listing, &clock))
        .collect();

    for view in &views {
        logger
            .debug_builder("Card resolved")
            .field("slug", view.slug.as_str())
            .field("variant", view.variant.as_str())
            .emit();
    }

    let document = render_document(&views, &args)?;

    match &args.output {
        Some(path) => {
            let path = ctx.resolve_path(path);
            tokio::fs::write(&path, &document)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output
                .success(&format!("Rendered {} cards to {}", views.len(), path.display()));
        }
        None => ctx
            .output
            .raw(&document)
            .context("Failed to write to stdout")?,
    }

    let counts = VariantCounts::tally(views.iter().map(|view| view.variant));
    logger
        .info_builder("Render complete")
        .field_u64("bytes", document.len() as u64)
        .field_u64("on_sale", counts.on_sale as u64)
        .field_u64("new_release", counts.new_release as u64)
        .field_u64("default", counts.default as u64)
        .emit();

    Ok(())
}

/// Serialize the views in the requested format.
pub fn render_document(views: &[CardView], args: &RenderArgs) -> Result<String> {
    match args.format {
        RenderFormat::Json => {
            serde_json::to_string_pretty(views).context("Failed to serialize card views")
        }
        RenderFormat::Html => {
            let grid = render_grid(views);
            Ok(if args.page {
                render_page(&args.title, &grid)
            } else {
                grid
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shoe_catalog::{Currency, FixedClock, ShoeListing};

    fn views() -> Vec<CardView> {
        let listings = ShoeListing::parse_many(
            r#"[{"slug":"tail-twister","name":"Tail-Twister","imageSrc":"/t.jpg",
                 "price":5000,"salePrice":4000,"releaseDate":"2020-01-01","numOfColors":3}]"#,
            Currency::USD,
        )
        .unwrap();
        let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        listings
            .iter()
            .map(|l| ShoeCard::default().view(l, &clock))
            .collect()
    }

    const LISTINGS: &str = r#"[
        {"slug":"tail-twister","name":"Tail-Twister","imageSrc":"/t.jpg",
         "price":5000,"salePrice":4000,"releaseDate":"2020-01-01","numOfColors":3},
        {"slug":"hi-tops","name":"Hi-Tops","imageSrc":"/h.jpg",
         "price":6500,"releaseDate":"2024-05-20","numOfColors":1}
    ]"#;

    fn args(format: RenderFormat, page: bool) -> RenderArgs {
        RenderArgs {
            input: "shoes.json".to_string(),
            today: None,
            page,
            title: "Sale".to_string(),
            format,
            output: None,
        }
    }

    #[test]
    fn test_html_grid() {
        let html = render_document(&views(), &args(RenderFormat::Html, false)).unwrap();
        assert!(html.starts_with("<section class=\"shoe-grid\""));
        assert!(html.contains("$40.00"));
    }

    #[test]
    fn test_html_page() {
        let html = render_document(&views(), &args(RenderFormat::Html, true)).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Sale</title>"));
    }

    #[test]
    fn test_json_views() {
        let json = render_document(&views(), &args(RenderFormat::Json, false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["variant"], "on-sale");
        assert_eq!(value[0]["href"], "/shoe/tail-twister");
    }

    #[tokio::test]
    async fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shoes.json"), LISTINGS).unwrap();
        let ctx = Context::in_dir(dir.path());

        let mut render = args(RenderFormat::Html, true);
        render.output = Some("cards.html".to_string());
        render.today = NaiveDate::from_ymd_opt(2024, 6, 1);
        run(render, &ctx).await.unwrap();

        let html = std::fs::read_to_string(dir.path().join("cards.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<strong class="price price--sale">$40.00</strong>"#));
        assert!(html.contains("Just released!"));
    }

    #[tokio::test]
    async fn test_today_decides_new_release() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shoes.json"), LISTINGS).unwrap();
        let ctx = Context::in_dir(dir.path());

        let mut render = args(RenderFormat::Json, false);
        render.output = Some("views.json".to_string());
        render.today = NaiveDate::from_ymd_opt(2025, 1, 1);
        run(render, &ctx).await.unwrap();

        let json = std::fs::read_to_string(dir.path().join("views.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["variant"], "on-sale");
        assert_eq!(value[1]["variant"], "default");
    }

    #[tokio::test]
    async fn test_run_reports_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shoes.json"), "{\"slug\":").unwrap();
        let ctx = Context::in_dir(dir.path());

        let mut render = args(RenderFormat::Html, false);
        render.output = Some("cards.html".to_string());
        let err = run(render, &ctx).await.unwrap_err();
        assert!(format!("{:#}", err).starts_with("Invalid listings in"));
        assert!(!dir.path().join("cards.html").exists());
    }
}
