//! Card view tree.
//!
//! A `CardView` is everything the HTML renderer needs, already formatted.
//! Hosts that render with their own framework can consume it directly.

use serde::Serialize;

use shoe_catalog::{format_price, pluralize, Clock, Money, PriceInfo, RecencyPolicy, ShoeListing, Variant};

/// Default path prefix of shoe detail pages.
pub const DEFAULT_DETAIL_PREFIX: &str = "/shoe";

/// Rendering options shared by every card on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct CardOptions {
    /// Prefix of the detail link, `{prefix}/{slug}`.
    pub detail_prefix: String,
    /// Window used to flag new releases.
    pub recency: RecencyPolicy,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            detail_prefix: DEFAULT_DETAIL_PREFIX.to_string(),
            recency: RecencyPolicy::default(),
        }
    }
}

/// Corner badge on the card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    JustReleased,
    Sale,
}

impl Badge {
    /// Badge shown for a variant; none for `default`.
    pub fn for_variant(variant: Variant) -> Option<Self> {
        match variant {
            Variant::OnSale => Some(Badge::Sale),
            Variant::NewRelease => Some(Badge::JustReleased),
            Variant::Default => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::JustReleased => "Just released!",
            Badge::Sale => "Sale",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            Badge::JustReleased => "new-release",
            Badge::Sale => "sale",
        }
    }
}

/// Formatted price strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceBlock {
    Regular { price: String },
    /// Original price is shown struck through, sale price emphasized.
    OnSale { original: String, sale: String },
}

impl PriceBlock {
    /// Two prices for a sale, the base price otherwise.
    pub fn build(price: &PriceInfo) -> Self {
        match price {
            PriceInfo::OnSale { original, sale } => PriceBlock::OnSale {
                original: display(original),
                sale: display(sale),
            },
            PriceInfo::Regular { price } => PriceBlock::Regular {
                price: display(price),
            },
        }
    }

    /// Every price string shown, in display order.
    pub fn price_strings(&self) -> Vec<&str> {
        match self {
            PriceBlock::Regular { price } => vec![price.as_str()],
            PriceBlock::OnSale { original, sale } => vec![original.as_str(), sale.as_str()],
        }
    }
}

fn display(money: &Money) -> String {
    format_price(money.amount_cents, money.currency)
}

/// Product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardImage {
    pub src: String,
    /// Decorative; the name is rendered next to it.
    pub alt: String,
}

/// View tree of one card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub slug: String,
    pub href: String,
    pub variant: Variant,
    pub image: CardImage,
    pub name: String,
    pub price: PriceBlock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    pub color_label: String,
}

impl CardView {
    /// Build the view of a listing as of the clock's instant.
    ///
    /// The variant, badge and price block all derive from the listing, so
    /// a "Sale" badge always comes with two prices.
    pub fn build(listing: &ShoeListing, options: &CardOptions, clock: &dyn Clock) -> Self {
        let variant = listing.variant(&options.recency, clock);
        Self {
            slug: listing.slug.to_string(),
            href: listing.slug.detail_path(&options.detail_prefix),
            variant,
            image: CardImage {
                src: listing.image_src.clone(),
                alt: String::new(),
            },
            name: listing.name.clone(),
            price: PriceBlock::build(&listing.price),
            badge: Badge::for_variant(variant),
            color_label: pluralize("Color", listing.num_of_colors),
        }
    }
}
