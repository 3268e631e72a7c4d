//! Theme constants and the card stylesheet.

/// Palette used by the card.
pub mod colors {
    pub const WHITE: &str = "hsl(0deg 0% 100%)";
    pub const GRAY_300: &str = "hsl(40deg 12% 75%)";
    pub const GRAY_500: &str = "hsl(210deg 8% 50%)";
    pub const GRAY_700: &str = "hsl(220deg 5% 40%)";
    pub const GRAY_900: &str = "hsl(220deg 3% 20%)";
    pub const PRIMARY: &str = "hsl(340deg 65% 47%)";
    pub const SECONDARY: &str = "hsl(240deg 60% 63%)";
}

/// Font weights.
pub mod weights {
    pub const NORMAL: u16 = 500;
    pub const MEDIUM: u16 = 600;
    pub const BOLD: u16 = 800;
}

/// Gap between the image and the first text row, in pixels.
pub const SPACER_SIZE_PX: u16 = 12;

/// Build the stylesheet for cards and the grid that holds them.
pub fn card_styles() -> String {
    use colors::*;
    use weights::*;

    format!(
        r#"
.shoe-grid {{ display: flex; flex-wrap: wrap; gap: 32px; }}
.shoe-card-link {{ text-decoration: none; color: inherit; }}
.shoe-card {{ flex: 1 1 300px; max-width: 460px; font-weight: {NORMAL}; }}
.shoe-card__image-wrapper {{ position: relative; }}
.shoe-card__image {{ width: 100%; }}
.shoe-card__spacer {{ display: block; width: {SPACER_SIZE_PX}px; min-width: {SPACER_SIZE_PX}px; height: {SPACER_SIZE_PX}px; min-height: {SPACER_SIZE_PX}px; }}
.shoe-card__row {{ font-size: 1rem; display: flex; justify-content: space-between; }}
.shoe-card__name {{ font-weight: {MEDIUM}; color: {GRAY_900}; }}
.shoe-card__sale-wrapper {{ display: flex; flex-direction: column; }}
.price--original {{ color: {GRAY_500}; text-decoration: line-through; }}
.price--sale {{ font-weight: {MEDIUM}; color: {PRIMARY}; }}
.shoe-card__colors {{ color: {GRAY_700}; }}
.badge {{ position: absolute; top: 16px; right: -5px; font-weight: {MEDIUM}; color: {WHITE}; padding: 5px 10px; border-radius: 4px; font-size: 0.875rem; }}
.badge--new-release {{ background-color: {SECONDARY}; }}
.badge--sale {{ background-color: {PRIMARY}; }}
.shoe-grid--empty {{ color: {GRAY_300}; }}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_use_theme() {
        let css = card_styles();
        assert!(css.contains("max-width: 460px"));
        assert!(css.contains(&format!("color: {}", colors::PRIMARY)));
        assert!(css.contains(&format!("background-color: {}", colors::SECONDARY)));
        assert!(css.contains("text-decoration: line-through"));
    }
}
