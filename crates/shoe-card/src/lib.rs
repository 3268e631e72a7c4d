//! Server-side rendering of shoe listing cards.
//!
//! A card shows the image, name, price and color count of a listing in one
//! of three variants (`on-sale`, `new-release`, `default`):
//!
//! - `ShoeCard` - resolves the variant and renders a listing
//! - `CardView` - formatted view tree behind the HTML
//! - `render_grid` / `PageShell` - preview layout around many cards
//!
//! # Example
//!
//! ```ignore
//! use shoe_card::ShoeCard;
//! use shoe_catalog::SystemClock;
//!
//! let html = ShoeCard::default().render(&listing, &SystemClock);
//! ```

mod card;
mod html;
mod layout;
mod theme;
mod view;

pub use card::*;
pub use html::escape_html;
pub use layout::*;
pub use theme::{card_styles, colors, weights, SPACER_SIZE_PX};
pub use view::*;
