//! Display variant of a shoe card.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::listing::PriceInfo;
use crate::recency::{is_new_shoe, Clock, RecencyPolicy, ReleaseDate};

/// The three mutually exclusive card states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "on-sale" => Some(Variant::OnSale),
            "new-release" => Some(Variant::NewRelease),
            "default" => Some(Variant::Default),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the variant for a listing.
///
/// A sale always wins, even for a shoe that is also a new release.
pub fn resolve_variant(
    price: &PriceInfo,
    release_date: ReleaseDate,
    policy: &RecencyPolicy,
    clock: &dyn Clock,
) -> Variant {
    if price.is_on_sale() {
        Variant::OnSale
    } else if is_new_shoe(release_date, policy, clock) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use crate::recency::FixedClock;
    use chrono::Duration;

    fn clock() -> FixedClock {
        FixedClock(ReleaseDate::parse("2024-06-01").unwrap().as_datetime())
    }

    fn released(days_ago: i64) -> ReleaseDate {
        ReleaseDate::new(clock().now() - Duration::days(days_ago))
    }

    #[test]
    fn test_sale_takes_precedence() {
        let price = PriceInfo::from_amounts(5000, Some(4000), Currency::USD);
        let policy = RecencyPolicy::default();
        assert_eq!(resolve_variant(&price, released(1), &policy, &clock()), Variant::OnSale);
        assert_eq!(resolve_variant(&price, released(900), &policy, &clock()), Variant::OnSale);
    }

    #[test]
    fn test_new_release() {
        let price = PriceInfo::from_amounts(5000, None, Currency::USD);
        let variant = resolve_variant(&price, released(27), &RecencyPolicy::default(), &clock());
        assert_eq!(variant, Variant::NewRelease);
    }

    #[test]
    fn test_default() {
        let price = PriceInfo::from_amounts(5000, None, Currency::USD);
        let variant = resolve_variant(&price, released(730), &RecencyPolicy::default(), &clock());
        assert_eq!(variant, Variant::Default);
    }

    #[test]
    fn test_variant_names() {
        for v in [Variant::OnSale, Variant::NewRelease, Variant::Default] {
            assert_eq!(Variant::from_str(v.as_str()), Some(v));
        }
        assert_eq!(
            serde_json::to_string(&Variant::NewRelease).unwrap(),
            "\"new-release\""
        );
    }
}
