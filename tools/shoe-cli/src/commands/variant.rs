//! Classify listings by card variant.

use anyhow::Result;
use serde::Serialize;

use shoe_catalog::{format_price, RecencyPolicy, Variant};

use super::{load_listings, run_clock, VariantArgs};
use crate::context::Context;
use crate::output::{format_row, variant_badge};

/// Number of listings per variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct VariantCounts {
    pub on_sale: usize,
    pub new_release: usize,
    pub default: usize,
}

impl VariantCounts {
    pub fn tally(variants: impl IntoIterator<Item = Variant>) -> Self {
        variants
            .into_iter()
            .fold(Self::default(), |mut counts, variant| {
                match variant {
                    Variant::OnSale => counts.on_sale += 1,
                    Variant::NewRelease => counts.new_release += 1,
                    Variant::Default => counts.default += 1,
                }
                counts
            })
    }
}

#[derive(Debug, Serialize)]
struct VariantRow {
    slug: String,
    variant: Variant,
    price: String,
    released: String,
}

/// Run the variant command.
pub async fn run(args: VariantArgs, ctx: &Context) -> Result<()> {
    let logger = ctx.logger("variant");
    let listings = load_listings(ctx, &args.input).await?;
    let clock = run_clock(args.today);
    let policy = RecencyPolicy::with_days(ctx.config.card.new_release_days);

    let rows: Vec<VariantRow> = listings
        .iter()
        .map(|listing| {
            let current = listing.price.current();
            VariantRow {
                slug: listing.slug.to_string(),
                variant: listing.variant(&policy, &clock),
                price: format_price(current.amount_cents, current.currency),
                released: listing.release_date.as_datetime().format("%Y-%m-%d").to_string(),
            }
        })
        .collect();
    let counts = VariantCounts::tally(rows.iter().map(|row| row.variant));

    logger
        .info_builder("Classified listings")
        .field_u64("listings", rows.len() as u64)
        .field_u64("on_sale", counts.on_sale as u64)
        .field_u64("new_release", counts.new_release as u64)
        .field_u64("default", counts.default as u64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "listings": rows, "counts": counts }));
        return Ok(());
    }

    let widths = [
        rows.iter().map(|r| r.slug.chars().count()).max().unwrap_or(0).max(4),
        11,
        rows.iter().map(|r| r.price.chars().count()).max().unwrap_or(0).max(5),
        10,
    ];

    ctx.output.header("Listing variants");
    ctx.output
        .table_row(&["SLUG", "VARIANT", "PRICE", "RELEASED"], &widths);
    for row in &rows {
        // pad before coloring so escape codes do not shift the columns
        let slug = format!("{:width$}", row.slug, width = widths[0]);
        let variant = format!("{:width$}", row.variant.as_str(), width = widths[1])
            .replacen(row.variant.as_str(), &variant_badge(row.variant), 1);
        let rest = format_row(&[row.price.as_str(), row.released.as_str()], &widths[2..]);
        println!("  {}  {}  {}", slug, variant, rest);
    }

    ctx.output.kv("on-sale", &counts.on_sale.to_string());
    ctx.output.kv("new-release", &counts.new_release.to_string());
    ctx.output.kv("default", &counts.default.to_string());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let counts = VariantCounts::tally([
            Variant::OnSale,
            Variant::Default,
            Variant::OnSale,
            Variant::NewRelease,
        ]);
        assert_eq!(
            counts,
            VariantCounts {
                on_sale: 2,
                new_release: 1,
                default: 1,
            }
        );
    }

    #[test]
    fn test_counts_serialize_kebab_case() {
        let json = serde_json::to_value(VariantCounts::tally([Variant::NewRelease])).unwrap();
        assert_eq!(json["new-release"], 1);
        assert_eq!(json["on-sale"], 0);
    }
}
