//! Output record shapes and small formatting helpers shared by both fetchers.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// One evolution scraped from the evolutions page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvolutionItem {
    /// Display name, or "Unknown".
    pub name: String,
    /// "FREE", or the non-zero coin and point costs joined by " / ".
    pub price: String,
    /// Requirement label (e.g. "Max Overall") to its numeric threshold.
    pub requirements: LabelMap,
    /// Stat label (e.g. "PAC") to its upgrade ceiling, in page order.
    pub upgrades: LabelMap,
    /// `YYYY-MM-DD HH:MM:SS`, the raw text when unparseable, or "-".
    pub expiration: String,
    /// Number of levels, as a decimal string.
    pub levels: String,
    /// Number of players using the evolution, or "0".
    pub players: String,
}

/// One squad building challenge, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SbcItem {
    /// Challenge name as the API sends it.
    pub name: String,
    /// "yes" or "no".
    pub new: String,
    /// Cost with thousands separators, or "0".
    pub price: String,
    /// Relative expiry text, or "-".
    pub expiration: String,
    /// Number of challenges in the set.
    pub challenges: String,
    /// Repeatability mode, or "no".
    pub repeatable: String,
    /// Refresh interval text, or "-".
    pub refreshes: String,
}

/// Label to value pairs that keep insertion order.
///
/// Inserting a label that is already present replaces its value without
/// moving it. Serializes as a JSON object with keys in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    entries: Vec<(String, String)>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&String> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for LabelMap {
    type Output = String;

    fn index(&self, label: &str) -> &String {
        match self.get(label) {
            Some(value) => value,
            None => panic!("no entry for label {label:?}"),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (label, value) in iter {
            map.insert(label, value);
        }
        map
    }
}

impl Serialize for LabelMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LabelMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LabelMapVisitor;

        impl<'de> Visitor<'de> for LabelMapVisitor {
            type Value = LabelMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of labels to strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LabelMap, A::Error> {
                let mut map = LabelMap::new();
                while let Some((label, value)) = access.next_entry::<String, String>()? {
                    map.insert(label, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(LabelMapVisitor)
    }
}

/// Format an integer with `,` between every group of three digits.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
