//! Display text helpers.

/// Count followed by the noun, pluralized with a trailing `s` unless the
/// count is exactly one.
///
/// ```
/// use shoe_catalog::pluralize;
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 3), "3 Colors");
/// ```
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular() {
        assert_eq!(pluralize("Color", 1), "1 Color");
    }

    #[test]
    fn test_plural() {
        assert_eq!(pluralize("Color", 0), "0 Colors");
        assert_eq!(pluralize("Color", 2), "2 Colors");
        assert_eq!(pluralize("Color", 11), "11 Colors");
    }
}
