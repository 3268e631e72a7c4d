//! Shoe listing data model.
//!
//! This crate holds everything a shoe card needs before it is rendered:
//!
//! - **Listing**: wire record (`RawListing`) and typed record (`ShoeListing`)
//! - **Money**: integer minor-unit prices and their display format
//! - **Recency**: release dates, clocks and the new-release window
//! - **Variant**: `on-sale` / `new-release` / `default` resolution
//!
//! # Example
//!
//! ```rust
//! use shoe_catalog::prelude::*;
//!
//! let listing = RawListing {
//!     slug: "tail-twister".to_string(),
//!     name: "Tail-Twister".to_string(),
//!     image_src: "/assets/tail-twister.jpg".to_string(),
//!     price: 5000,
//!     sale_price: Some(4000),
//!     release_date: RawReleaseDate::Text("2020-01-01".to_string()),
//!     num_of_colors: 3,
//!     currency: None,
//! }
//! .into_listing(Currency::USD)
//! .unwrap();
//!
//! let variant = listing.variant(&RecencyPolicy::default(), &SystemClock);
//! assert_eq!(variant, Variant::OnSale);
//! ```

pub mod error;
pub mod listing;
pub mod money;
pub mod recency;
pub mod slug;
pub mod text;
pub mod variant;

pub use error::CatalogError;
pub use listing::{PriceInfo, RawListing, RawReleaseDate, ShoeListing};
pub use money::{format_price, Currency, Money};
pub use recency::{
    is_new_shoe, Clock, FixedClock, RecencyPolicy, ReleaseDate, SystemClock,
    DEFAULT_NEW_RELEASE_DAYS,
};
pub use slug::ShoeSlug;
pub use text::pluralize;
pub use variant::{resolve_variant, Variant};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::listing::{PriceInfo, RawListing, RawReleaseDate, ShoeListing};
    pub use crate::money::{format_price, Currency, Money};
    pub use crate::recency::{Clock, FixedClock, RecencyPolicy, ReleaseDate, SystemClock};
    pub use crate::slug::ShoeSlug;
    pub use crate::text::pluralize;
    pub use crate::variant::{resolve_variant, Variant};
}
