//! Metadata store contract
//!
//! The block system consumes plain records from an external metadata store
//! (saved pages, preset collections, publishing info). Only the read/write
//! contract lives here; backends are collaborators supplied by the host.
//! Any store round-trip completes before a tree is constructed — the
//! renderer itself never awaits.

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

pub use memory::MemoryMetadataStore;

/// One opaque, category-scoped metadata record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaRecord {
    /// Record id, unique within its category.
    pub id: String,
    /// Human-readable record name.
    pub name: String,
    /// Opaque payload; the core never interprets it.
    #[serde(default)]
    pub data: JsonValue,
}

impl MetaRecord {
    /// Create a record with the given id.
    pub fn new(id: impl Into<String>, name: impl Into<String>, data: JsonValue) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data,
        }
    }

    /// Create a record with a freshly generated UUID v4 id.
    pub fn with_generated_id(name: impl Into<String>, data: JsonValue) -> Self {
        Self::new(Uuid::new_v4().to_string(), name, data)
    }
}

/// Category-scoped metadata store.
///
/// Writes are last-write-wins keyed by `(category, id)`. Reads of missing
/// records return `Ok(None)` — absence is expected, not an error.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// List every record in a category.
    async fn list_by_category(&self, category: &str) -> Result<Vec<MetaRecord>, StoreError>;

    /// Fetch one record, or `None` when absent.
    async fn get_meta(&self, category: &str, id: &str) -> Result<Option<MetaRecord>, StoreError>;

    /// Insert or replace a record, keyed by `(category, meta.id)`.
    async fn upsert_meta(&self, category: &str, meta: MetaRecord) -> Result<(), StoreError>;
}

/// Metadata store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend failure (connection, serialization, quota).
    #[error("metadata store backend error: {0}")]
    Backend(String),
}
