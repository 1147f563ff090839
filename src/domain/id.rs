//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Listing identifier - newtype for type safety.
///
/// Upstream ids arrive as numbers or strings; both deserialize into the same
/// string form so `42` and `"42"` name the same listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawListingId")]
pub struct ListingId(String);

impl ListingId {
    /// Create a new `ListingId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the listing ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ListingId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u64> for ListingId {
    fn from(n: u64) -> Self {
        Self::new(n.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListingId {
    Number(u64),
    Text(String),
}

impl From<RawListingId> for ListingId {
    fn from(raw: RawListingId) -> Self {
        match raw {
            RawListingId::Number(n) => Self::from(n),
            RawListingId::Text(s) => Self::new(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_are_equal() {
        let numeric: ListingId = serde_json::from_str("42").unwrap();
        let text: ListingId = serde_json::from_str("\"42\"").unwrap();

        assert_eq!(numeric, text);
        assert_eq!(numeric, ListingId::from(42u64));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ListingId::from("abc-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-1\"");
    }
}
