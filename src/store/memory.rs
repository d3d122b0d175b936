//! In-memory metadata store
//!
//! Reference implementation of [`MetadataStore`] for tests and hosts
//! without a persistent backend.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{MetaRecord, MetadataStore, StoreError};

/// `Mutex<HashMap>`-backed store. Last write wins per `(category, id)`.
#[derive(Debug, Default)]
pub struct MemoryMetadataStore {
    records: Mutex<HashMap<(String, String), MetaRecord>>,
}

impl MemoryMetadataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records across all categories.
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl MetadataStore for MemoryMetadataStore {
    async fn list_by_category(&self, category: &str) -> Result<Vec<MetaRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        let mut listed: Vec<MetaRecord> = records
            .iter()
            .filter(|((cat, _), _)| cat == category)
            .map(|(_, record)| record.clone())
            .collect();
        // HashMap iteration order is arbitrary; keep listings stable.
        listed.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(listed)
    }

    async fn get_meta(&self, category: &str, id: &str) -> Result<Option<MetaRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .get(&(category.to_string(), id.to_string()))
            .cloned())
    }

    async fn upsert_meta(&self, category: &str, meta: MetaRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        records.insert((category.to_string(), meta.id.clone()), meta);
        Ok(())
    }
}
