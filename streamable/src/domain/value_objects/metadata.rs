//! Stream metadata value object.

use std::collections::BTreeMap;
use core::fmt;

/// A single metadata value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Bool(bool),
    Int(u64),
    Text(String),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Key/value description of the resource behind a stream.
///
/// Entries are kept sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: BTreeMap<&'static str, MetadataValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous value under `key`.
    pub fn insert(&mut self, key: &'static str, value: impl Into<MetadataValue>) {
        self.entries.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Narrow the map to `key`, or keep everything when `key` is `None`.
    ///
    /// Returns `None` if `key` names an entry that does not exist.
    pub fn select(self, key: Option<&str>) -> Option<Self> {
        let Some(key) = key else {
            return Some(self);
        };
        let (k, v) = self.entries.into_iter().find(|(k, _)| *k == key)?;
        let mut selected = Self::new();
        selected.insert(k, v);
        Some(selected)
    }
}
