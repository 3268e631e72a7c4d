//! Shoe card renderer.

use shoe_catalog::{Clock, ShoeListing};

use crate::html::escape_html;
use crate::view::{Badge, CardOptions, CardView, PriceBlock};

/// Renders listings into cards with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct ShoeCard {
    options: CardOptions,
}

impl ShoeCard {
    pub fn new(options: CardOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    /// Resolve the variant and build the view tree.
    pub fn view(&self, listing: &ShoeListing, clock: &dyn Clock) -> CardView {
        CardView::build(listing, &self.options, clock)
    }

    /// Render a listing straight to HTML.
    pub fn render(&self, listing: &ShoeListing, clock: &dyn Clock) -> String {
        render_card(&self.view(listing, clock))
    }
}

/// Render one card.
pub fn render_card(view: &CardView) -> String {
    let badge_html = view.badge.map(render_badge).unwrap_or_default();

    format!(
        r#"<a class="shoe-card-link" href="{href}">
    <article class="shoe-card shoe-card--{variant}" data-slug="{slug}" data-variant="{variant}">
        <div class="shoe-card__image-wrapper">
            <img class="shoe-card__image" alt="{alt}" src="{src}">
            {badge_html}
        </div>
        <span class="shoe-card__spacer"></span>
        <div class="shoe-card__row">
            <h3 class="shoe-card__name">{name}</h3>
            {price_html}
        </div>
        <div class="shoe-card__row">
            <p class="shoe-card__colors">{color_label}</p>
        </div>
    </article>
</a>"#,
        href = escape_html(&view.href),
        variant = view.variant.as_str(),
        slug = escape_html(&view.slug),
        alt = escape_html(&view.image.alt),
        src = escape_html(&view.image.src),
        badge_html = badge_html,
        name = escape_html(&view.name),
        price_html = render_price(&view.price),
        color_label = escape_html(&view.color_label),
    )
}

fn render_badge(badge: Badge) -> String {
    format!(
        r#"<span class="badge badge--{}">{}</span>"#,
        badge.css_modifier(),
        badge.label()
    )
}

fn render_price(price: &PriceBlock) -> String {
    match price {
        PriceBlock::Regular { price } => {
            format!(r#"<span class="price">{}</span>"#, escape_html(price))
        }
        PriceBlock::OnSale { original, sale } => format!(
            r#"<div class="shoe-card__sale-wrapper">
                <s class="price price--original">{}</s>
                <strong class="price price--sale">{}</strong>
            </div>"#,
            escape_html(original),
            escape_html(sale)
        ),
    }
}
