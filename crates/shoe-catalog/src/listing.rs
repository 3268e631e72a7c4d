//! Shoe listing record, in wire form and typed form.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::money::{Currency, Money};
use crate::recency::{Clock, RecencyPolicy, ReleaseDate};
use crate::slug::ShoeSlug;
use crate::variant::{resolve_variant, Variant};

/// Price of a listing, with the sale case made explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceInfo {
    /// Listed at its base price.
    Regular { price: Money },
    /// Discounted; `original` is the base price.
    OnSale { original: Money, sale: Money },
}

impl PriceInfo {
    /// Build from a base price and an optional sale price, both in minor units.
    pub fn from_amounts(price: i64, sale_price: Option<i64>, currency: Currency) -> Self {
        let original = Money::new(price, currency);
        match sale_price {
            Some(sale) => PriceInfo::OnSale {
                original,
                sale: Money::new(sale, currency),
            },
            None => PriceInfo::Regular { price: original },
        }
    }

    pub fn is_on_sale(&self) -> bool {
        matches!(self, PriceInfo::OnSale { .. })
    }

    /// Base price, before any sale.
    pub fn original(&self) -> Money {
        match self {
            PriceInfo::Regular { price } => *price,
            PriceInfo::OnSale { original, .. } => *original,
        }
    }

    /// Price the customer pays.
    pub fn current(&self) -> Money {
        match self {
            PriceInfo::Regular { price } => *price,
            PriceInfo::OnSale { sale, .. } => *sale,
        }
    }
}

/// Release date as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawReleaseDate {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// `YYYY-MM-DD` or RFC 3339.
    Text(String),
}

impl RawReleaseDate {
    pub fn parse(&self) -> Result<ReleaseDate, CatalogError> {
        match self {
            RawReleaseDate::Millis(ms) => ReleaseDate::from_millis(*ms),
            RawReleaseDate::Text(s) => ReleaseDate::parse(s),
        }
    }
}

/// Listing as supplied by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    /// Base price in minor units.
    pub price: i64,
    /// Sale price in minor units; `null` and a missing field both mean no sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<i64>,
    pub release_date: RawReleaseDate,
    pub num_of_colors: u32,
    /// ISO currency code of both prices; absent means the caller's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl RawListing {
    /// Validate and convert into a typed listing.
    ///
    /// Prices are in the listing's own `currency` when it names one,
    /// otherwise in `default_currency`.
    pub fn into_listing(self, default_currency: Currency) -> Result<ShoeListing, CatalogError> {
        if self.price < 0 {
            return Err(CatalogError::NegativePrice {
                field: "price",
                amount: self.price,
            });
        }
        if let Some(sale) = self.sale_price.filter(|s| *s < 0) {
            return Err(CatalogError::NegativePrice {
                field: "salePrice",
                amount: sale,
            });
        }

        let currency = self.currency.unwrap_or(default_currency);
        Ok(ShoeListing {
            slug: ShoeSlug::parse(self.slug)?,
            name: self.name,
            image_src: self.image_src,
            price: PriceInfo::from_amounts(self.price, self.sale_price, currency),
            release_date: self.release_date.parse()?,
            num_of_colors: self.num_of_colors,
        })
    }
}

/// A shoe listing ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawListing", into = "RawListing")]
pub struct ShoeListing {
    pub slug: ShoeSlug,
    pub name: String,
    pub image_src: String,
    pub price: PriceInfo,
    pub release_date: ReleaseDate,
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Display variant of this listing at the clock's current instant.
    pub fn variant(&self, policy: &RecencyPolicy, clock: &dyn Clock) -> Variant {
        resolve_variant(&self.price, self.release_date, policy, clock)
    }

    /// Parse a single listing or an array of listings from JSON.
    ///
    /// Listings without a `currency` field are priced in `currency`.
    pub fn parse_many(json: &str, currency: Currency) -> Result<Vec<ShoeListing>, CatalogError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let raws: Vec<RawListing> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            vec![serde_json::from_value(value)?]
        };
        raws.into_iter()
            .map(|raw| raw.into_listing(currency))
            .collect()
    }
}

impl TryFrom<RawListing> for ShoeListing {
    type Error = CatalogError;

    fn try_from(raw: RawListing) -> Result<Self, Self::Error> {
        raw.into_listing(Currency::default())
    }
}

impl From<ShoeListing> for RawListing {
    fn from(listing: ShoeListing) -> Self {
        let sale_price = match listing.price {
            PriceInfo::OnSale { sale, .. } => Some(sale.amount_cents),
            PriceInfo::Regular { .. } => None,
        };
        let currency = listing.price.original().currency;
        RawListing {
            slug: listing.slug.into(),
            name: listing.name,
            image_src: listing.image_src,
            price: listing.price.original().amount_cents,
            sale_price,
            release_date: RawReleaseDate::Text(listing.release_date.to_string()),
            num_of_colors: listing.num_of_colors,
            currency: (currency != Currency::default()).then_some(currency),
        }
    }
}
