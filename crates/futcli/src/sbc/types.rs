//! SBC API record types and the category grouping.

use crate::record::{thousands, SbcItem};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Number, Value};

/// One entry of the API's `data` array, as the API sends it.
///
/// Only `name` and `category.slug` are required. The display fields are raw
/// JSON; a value of an unexpected type still formats and never rejects the
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SbcRecord {
    /// Challenge name.
    pub name: String,
    /// Category the challenge is listed under.
    pub category: SbcCategory,
    /// Price in coins, usually an integer.
    pub cost: Option<Value>,
    /// Whether the challenge was recently added; read by truthiness.
    pub is_new: Option<Value>,
    /// Relative expiry text such as "2 days".
    pub expires_in: Option<Value>,
    /// Number of challenges in the set.
    pub challenges_count: Option<Value>,
    /// Repeatability mode such as "unlimited".
    pub repeatability_mode: Option<Value>,
    /// Refresh interval text such as "24h".
    pub repeat_refresh_interval_text: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbcCategory {
    /// URL-safe category identifier.
    pub slug: String,
}

impl SbcRecord {
    pub fn slug(&self) -> &str {
        &self.category.slug
    }
}

impl From<&SbcRecord> for SbcItem {
    fn from(r: &SbcRecord) -> Self {
        let yes_no = |b: bool| (if b { "yes" } else { "no" }).to_string();
        let text_or = |v: &Option<Value>, default: &str| {
            scalar_text(v.as_ref())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        SbcItem {
            name: r.name.clone(),
            new: yes_no(r.is_new.as_ref().is_some_and(truthy)),
            price: r
                .cost
                .as_ref()
                .and_then(format_cost)
                .unwrap_or_else(|| "0".to_string()),
            expiration: text_or(&r.expires_in, "-"),
            challenges: text_or(&r.challenges_count, "0"),
            repeatable: text_or(&r.repeatability_mode, "no"),
            refreshes: text_or(&r.repeat_refresh_interval_text, "-"),
        }
    }
}

/// JSON truthiness: `false`, `null`, zero, and empty strings, arrays, or
/// objects are false.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Strings as-is, numbers and booleans as written; `None` for anything else.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A cost with thousands separators; `None` for zero or a non-scalar.
///
/// Numeric strings are grouped like numbers, other strings pass through.
fn format_cost(cost: &Value) -> Option<String> {
    match cost {
        Value::Number(n) => group_number(n),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<Number>() {
                Ok(n) => group_number(&n),
                Err(_) => Some(s.clone()),
            }
        }
        _ => None,
    }
}

fn group_number(n: &Number) -> Option<String> {
    if let Some(u) = n.as_u64() {
        return (u > 0).then(|| thousands(u));
    }
    if let Some(i) = n.as_i64() {
        return Some(format!("-{}", thousands(i.unsigned_abs())));
    }

    let f = n.as_f64().filter(|f| f.is_finite() && *f != 0.0)?;
    let sign = if f < 0.0 { "-" } else { "" };
    let text = f.abs().to_string();
    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (text.as_str(), None),
    };
    let whole = thousands(whole.parse().ok()?);
    Some(match frac {
        Some(frac) => format!("{sign}{whole}.{frac}"),
        None => format!("{sign}{whole}"),
    })
}

/// SBC items keyed by category slug.
///
/// Categories keep the order in which they were first seen, and items keep
/// their API order within a category. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SbcGroups {
    groups: Vec<(String, Vec<SbcItem>)>,
}

impl SbcGroups {
    /// Group records by slug.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SbcRecord>,
    {
        let mut out = Self::default();
        for record in records {
            out.push(record.slug(), SbcItem::from(record));
        }
        out
    }

    fn push(&mut self, slug: &str, item: SbcItem) {
        match self.groups.iter_mut().find(|(s, _)| s == slug) {
            Some((_, items)) => items.push(item),
            None => self.groups.push((slug.to_string(), vec![item])),
        }
    }

    pub fn get(&self, slug: &str) -> Option<&[SbcItem]> {
        self.groups
            .iter()
            .find(|(s, _)| s == slug)
            .map(|(_, items)| items.as_slice())
    }

    /// Slugs in discovery order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(s, _)| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SbcItem])> {
        self.groups.iter().map(|(s, items)| (s.as_str(), items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every item, category after category.
    pub fn into_flat(self) -> Vec<SbcItem> {
        self.groups.into_iter().flat_map(|(_, items)| items).collect()
    }
}

impl Serialize for SbcGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (slug, items) in &self.groups {
            map.serialize_entry(slug, items)?;
        }
        map.end()
    }
}
