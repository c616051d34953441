//! Diff engine.
//!
//! Compares two [`SecretSet`] snapshots and classifies every name present
//! in either set into exactly one category. Pure and deterministic; runs
//! in O(|source| + |target|) via hash-map lookups.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::secret::SecretSet;

/// The classification assigned to a single name when two sets are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiffCategory {
    /// Present in source, absent from target.
    OnlyInSource,
    /// Present in target, absent from source.
    OnlyInTarget,
    /// Present in both with different values.
    ValueDiffers,
    /// Values equal, metadata differs.
    MetadataDiffers,
    /// Values and metadata equal.
    Identical,
}

impl std::fmt::Display for DiffCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::OnlyInSource => "source-only",
            Self::OnlyInTarget => "target-only",
            Self::ValueDiffers => "value-differs",
            Self::MetadataDiffers => "metadata-differs",
            Self::Identical => "identical",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for DiffCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source-only" => Ok(Self::OnlyInSource),
            "target-only" => Ok(Self::OnlyInTarget),
            "value-differs" => Ok(Self::ValueDiffers),
            "metadata-differs" => Ok(Self::MetadataDiffers),
            "identical" => Ok(Self::Identical),
            other => Err(format!(
                "unknown category '{}' (expected source-only, target-only, \
                 value-differs, metadata-differs or identical)",
                other
            )),
        }
    }
}

/// The full comparison between a source and a target set.
///
/// Every name in `source.keys ∪ target.keys` lands in exactly one bucket;
/// a name whose value and metadata both differ lands in `value_differs`
/// only. Buckets are sorted name sets, so reports are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub only_in_source: BTreeSet<String>,
    pub only_in_target: BTreeSet<String>,
    pub value_differs: BTreeSet<String>,
    pub metadata_differs: BTreeSet<String>,
    pub identical: BTreeSet<String>,
}

impl DiffResult {
    /// The bucket for one category.
    pub fn names(&self, category: DiffCategory) -> &BTreeSet<String> {
        match category {
            DiffCategory::OnlyInSource => &self.only_in_source,
            DiffCategory::OnlyInTarget => &self.only_in_target,
            DiffCategory::ValueDiffers => &self.value_differs,
            DiffCategory::MetadataDiffers => &self.metadata_differs,
            DiffCategory::Identical => &self.identical,
        }
    }

    /// Total number of classified names.
    pub fn len(&self) -> usize {
        self.only_in_source.len()
            + self.only_in_target.len()
            + self.value_differs.len()
            + self.metadata_differs.len()
            + self.identical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the two sets matched exactly.
    pub fn is_identical(&self) -> bool {
        self.only_in_source.is_empty()
            && self.only_in_target.is_empty()
            && self.value_differs.is_empty()
            && self.metadata_differs.is_empty()
    }

    /// Names needing a value write to bring target up to source:
    /// source-only plus value-differs.
    pub fn out_of_sync(&self) -> impl Iterator<Item = &str> {
        self.only_in_source
            .iter()
            .chain(self.value_differs.iter())
            .map(String::as_str)
    }
}

/// Compare `source` against `target`.
///
/// Value mismatch takes precedence over metadata mismatch; a name differing
/// in both is classified `ValueDiffers` only. Total over any two sets,
/// including empty ones. No side effects.
pub fn diff(source: &SecretSet, target: &SecretSet) -> DiffResult {
    let mut result = DiffResult::default();

    for record in source.iter() {
        let name = record.name();
        match target.get(name) {
            None => {
                result.only_in_source.insert(name.to_string());
            }
            Some(other) => {
                if record.value() != other.value() {
                    result.value_differs.insert(name.to_string());
                } else if record.metadata() != other.metadata() {
                    result.metadata_differs.insert(name.to_string());
                } else {
                    result.identical.insert(name.to_string());
                }
            }
        }
    }

    for record in target.iter() {
        if !source.contains(record.name()) {
            result.only_in_target.insert(record.name().to_string());
        }
    }

    result
}
