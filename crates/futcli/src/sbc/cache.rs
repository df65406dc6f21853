//! In-memory cache for the SBC catalog sweep.
//!
//! Filled once per fetcher by the first pagination sweep and reused for every
//! later call. There is no TTL; only [`SbcCache::clear`] empties it.

use super::types::SbcRecord;

/// Holds the aggregated API records of one completed sweep.
#[derive(Debug, Default)]
pub struct SbcCache {
    records: Option<Vec<SbcRecord>>,
}

impl SbcCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached records, or `None` before the first sweep.
    ///
    /// An empty slice is a valid cached result (a failed or empty sweep).
    pub fn get(&self) -> Option<&[SbcRecord]> {
        self.records.as_deref()
    }

    pub fn is_populated(&self) -> bool {
        self.records.is_some()
    }

    /// Store the result of a sweep, replacing anything cached before.
    pub fn put(&mut self, records: Vec<SbcRecord>) -> &[SbcRecord] {
        tracing::debug!("SbcCache populated with {} records", records.len());
        self.records.insert(records).as_slice()
    }

    /// Drop the cached sweep so the next call fetches again.
    pub fn clear(&mut self) {
        if self.records.take().is_some() {
            tracing::debug!("SbcCache cleared");
        }
    }
}
