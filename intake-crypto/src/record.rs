//! Intake record payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arbitrary string form fields collected by the intake form.
///
/// The signature image and the derived identifier are never part of the
/// record. Fields are held in a `BTreeMap` so the JSON serialization is
/// canonical (sorted keys): a given record always seals the same
/// plaintext bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRecord(BTreeMap<String, String>);

impl SubmissionRecord {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a field, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates fields in canonical (sorted-key) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Canonical JSON used as the encryption plaintext.
    pub fn to_canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<BTreeMap<String, String>> for SubmissionRecord {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self(fields)
    }
}

impl FromIterator<(String, String)> for SubmissionRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
