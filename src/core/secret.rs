//! Secret data model.
//!
//! A [`SecretSet`] is one store's full snapshot at a point in time:
//! name → value plus per-secret metadata. Sets are built once per fetch
//! and only read afterwards; a fresh fetch produces a fresh set.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-secret metadata as reported by the store.
///
/// Every field except `enabled` is optional: stores differ in what they
/// report, and an absent field is distinct from a present-but-empty one.
/// Tag equality is unordered key/value equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

fn default_enabled() -> bool {
    true
}

impl Default for SecretMetadata {
    fn default() -> Self {
        Self {
            created: None,
            updated: None,
            version: None,
            enabled: true,
            expires: None,
            tags: HashMap::new(),
        }
    }
}

impl SecretMetadata {
    /// Metadata with `created` and `updated` stamped now.
    pub fn stamped_now() -> Self {
        let now = Utc::now();
        Self {
            created: Some(now),
            updated: Some(now),
            ..Self::default()
        }
    }
}

/// A single secret: name, opaque value, metadata.
///
/// The name is case-sensitive and immutable once the record is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretRecord {
    name: String,
    value: String,
    #[serde(default)]
    metadata: SecretMetadata,
}

impl SecretRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            metadata: SecretMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: SecretMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn metadata(&self) -> &SecretMetadata {
        &self.metadata
    }
}

impl std::fmt::Display for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never the value.
        write!(f, "{}", self.name)
    }
}

/// One store's snapshot: a map from secret name to record.
///
/// Lookup is O(1); `names()` yields names in lexicographic order for
/// stable reporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecretSet {
    records: HashMap<String, SecretRecord>,
}

impl SecretSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any previous record with the same name.
    pub fn insert(&mut self, record: SecretRecord) {
        self.records.insert(record.name().to_string(), record);
    }

    pub fn get(&self, name: &str) -> Option<&SecretRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All names, sorted lexicographically.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate records in arbitrary map order.
    pub fn iter(&self) -> impl Iterator<Item = &SecretRecord> {
        self.records.values()
    }
}

impl FromIterator<SecretRecord> for SecretSet {
    fn from_iter<I: IntoIterator<Item = SecretRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SecretSet {
    type Item = &'a SecretRecord;
    type IntoIter = std::collections::hash_map::Values<'a, String, SecretRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = SecretRecord::new("API_KEY", "sk-123");

        assert_eq!(record.name(), "API_KEY");
        assert_eq!(record.value(), "sk-123");
        assert!(record.metadata().enabled);
    }

    #[test]
    fn test_display_never_shows_value() {
        let record = SecretRecord::new("DATABASE_URL", "postgres://user:hunter2@db");

        assert_eq!(format!("{}", record), "DATABASE_URL");
    }

    #[test]
    fn test_names_sorted_regardless_of_insertion_order() {
        let set: SecretSet = ["zeta", "alpha", "mid"]
            .iter()
            .map(|n| SecretRecord::new(*n, "v"))
            .collect();

        assert_eq!(set.names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut set = SecretSet::new();
        set.insert(SecretRecord::new("KEY", "old"));
        set.insert(SecretRecord::new("KEY", "new"));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("KEY").unwrap().value(), "new");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut set = SecretSet::new();
        set.insert(SecretRecord::new("Key", "1"));
        set.insert(SecretRecord::new("key", "2"));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_metadata_tag_equality_is_unordered() {
        let mut a = SecretMetadata::default();
        a.tags.insert("env".into(), "prod".into());
        a.tags.insert("team".into(), "core".into());

        let mut b = SecretMetadata::default();
        b.tags.insert("team".into(), "core".into());
        b.tags.insert("env".into(), "prod".into());

        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_value_is_a_present_value() {
        let mut set = SecretSet::new();
        set.insert(SecretRecord::new("EMPTY", ""));

        assert!(set.contains("EMPTY"));
        assert_eq!(set.get("EMPTY").unwrap().value(), "");
    }
}
