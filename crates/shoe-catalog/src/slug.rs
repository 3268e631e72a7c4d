//! URL slug newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Identifier of a shoe, used as the last segment of its detail link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShoeSlug(String);

impl ShoeSlug {
    /// Validate and wrap a slug.
    ///
    /// Rejects empty slugs and characters that would escape the path
    /// segment (`/`, `?`, `#`, whitespace).
    pub fn parse(slug: impl Into<String>) -> Result<Self, CatalogError> {
        let slug = slug.into();
        let invalid = slug.is_empty()
            || slug
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'));
        if invalid {
            return Err(CatalogError::InvalidSlug(slug));
        }
        Ok(Self(slug))
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Detail page path under the given prefix, e.g. `/shoe/tail-twister`.
    pub fn detail_path(&self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for ShoeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ShoeSlug {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<ShoeSlug> for String {
    fn from(slug: ShoeSlug) -> Self {
        slug.0
    }
}

impl AsRef<str> for ShoeSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_parse() {
        let slug = ShoeSlug::parse("tail-twister").unwrap();
        assert_eq!(slug.as_str(), "tail-twister");
        assert_eq!(format!("{}", slug), "tail-twister");
    }

    #[test]
    fn test_slug_rejects_path_characters() {
        assert!(ShoeSlug::parse("").is_err());
        assert!(ShoeSlug::parse("a/b").is_err());
        assert!(ShoeSlug::parse("a b").is_err());
        assert!(ShoeSlug::parse("a?b").is_err());
        assert!(ShoeSlug::parse("a#b").is_err());
    }

    #[test]
    fn test_detail_path() {
        let slug = ShoeSlug::parse("pink-pounder").unwrap();
        assert_eq!(slug.detail_path("/shoe"), "/shoe/pink-pounder");
        assert_eq!(slug.detail_path("/shoe/"), "/shoe/pink-pounder");
    }
}
