//! Saved designs: named, tagged snapshots of a configuration.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::configuration::SneakerConfiguration;
use crate::types::{DesignId, ProductId, UserId};

/// Errors that can occur when parsing a [`DesignName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignNameError {
    /// The name is empty after trimming.
    #[error("Name required")]
    Empty,
}

/// The user-chosen name of a saved design, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DesignName(String);

impl DesignName {
    /// Parse a `DesignName`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DesignNameError::Empty`] if nothing is left after trimming.
    pub fn parse(s: &str) -> Result<Self, DesignNameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DesignNameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DesignName {
    type Error = DesignNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DesignName> for String {
    fn from(name: DesignName) -> Self {
        name.0
    }
}

impl fmt::Display for DesignName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text tags attached to a design.
///
/// Tags are trimmed and lower-cased on insertion, so duplicates are
/// suppressed case-insensitively. Blank tags are ignored. Insertion order is
/// kept for display but carries no meaning; equality ignores it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a tag. Returns `false` if it was blank or already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        let normalized = tag.trim().to_lowercase();
        if normalized.is_empty() || self.0.contains(&normalized) {
            return false;
        }
        self.0.push(normalized);
        true
    }

    /// Remove a tag. Returns `false` if it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let normalized = tag.trim().to_lowercase();
        let before = self.0.len();
        self.0.retain(|t| *t != normalized);
        self.0.len() != before
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(&tag.trim().to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|t| other.0.contains(t))
    }
}

impl Eq for TagSet {}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.insert(tag.as_ref());
        }
        tags
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0
    }
}

/// Payload for saving the active configuration.
///
/// `product_id` may be absent when no product was ever selected; the store
/// then falls back to the first catalogue product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDesign {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub name: DesignName,
    pub configuration: SneakerConfiguration,
    #[serde(default)]
    pub tags: TagSet,
}

/// A persisted snapshot of a configuration tied to an owner and a product.
///
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDesign {
    pub id: DesignId,
    pub owner_id: UserId,
    pub product_id: ProductId,
    pub name: DesignName,
    pub configuration: SneakerConfiguration,
    pub tags: TagSet,
    pub created_at: DateTime<Utc>,
}

impl SavedDesign {
    /// Whether the name or any tag contains `query`, ignoring case.
    ///
    /// An empty query matches every design.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.as_str().to_lowercase().contains(&query)
            || self.tags.iter().any(|tag| tag.contains(&query))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn design(name: &str, tags: &[&str]) -> SavedDesign {
        SavedDesign {
            id: DesignId::generate(),
            owner_id: UserId::generate(),
            product_id: ProductId::generate(),
            name: DesignName::parse(name).unwrap(),
            configuration: SneakerConfiguration::builtin_default(),
            tags: tags.iter().collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_name_trimmed() {
        assert_eq!(DesignName::parse("  Beach Day ").unwrap().as_str(), "Beach Day");
    }

    #[test]
    fn test_name_empty() {
        assert_eq!(DesignName::parse("   "), Err(DesignNameError::Empty));
        assert!(serde_json::from_str::<DesignName>("\"\"").is_err());
    }

    #[test]
    fn test_tags_dedupe_case_insensitively() {
        let mut tags = TagSet::new();
        assert!(tags.insert("Summer"));
        assert!(!tags.insert("summer"));
        assert!(!tags.insert("  SUMMER "));
        assert!(tags.insert("bright"));
        assert!(!tags.insert("   "));
        assert_eq!(tags.as_slice(), ["summer", "bright"]);
    }

    #[test]
    fn test_tags_remove() {
        let mut tags: TagSet = ["summer", "bright"].into_iter().collect();
        assert!(tags.remove("Summer"));
        assert!(!tags.remove("summer"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_tags_equality_ignores_order() {
        let a: TagSet = ["summer", "bright"].into_iter().collect();
        let b: TagSet = ["bright", "summer"].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tags_deserialize_normalizes() {
        let tags: TagSet = serde_json::from_str(r#"["Retro", "retro", "NEON"]"#).unwrap();
        assert_eq!(tags.as_slice(), ["retro", "neon"]);
        assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["retro","neon"]"#);
    }

    #[test]
    fn test_matches_query_name_or_tag() {
        let d = design("Beach Day", &["summer", "bright"]);
        assert!(d.matches_query("beach"));
        assert!(d.matches_query("BRIG"));
        assert!(d.matches_query(""));
        assert!(!d.matches_query("winter"));
    }
}
