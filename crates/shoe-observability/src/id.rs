//! Render correlation identifier.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for one render run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderId(String);

impl RenderId {
    /// Generate a new render ID from the clock and a process-wide counter.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

        Self(format!("{:x}-{:04x}", nanos, counter))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = RenderId::generate();
        let b = RenderId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_string() {
        assert_eq!(RenderId::from_string("abc").to_string(), "abc");
    }
}
