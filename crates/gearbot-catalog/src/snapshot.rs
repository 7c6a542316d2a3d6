//! Immutable snapshots of the loaded source tables.

use chrono::{DateTime, Utc};
use serde::Serialize;

use gearbot_core::types::{MediaRecord, ProductRecord};

/// One loaded products table.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub products: Vec<ProductRecord>,
    /// SHA-256 of the raw source bytes; empty when the source was unreadable.
    pub fingerprint: String,
    pub loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<ProductRecord>, fingerprint: String) -> Self {
        Self { products, fingerprint, loaded_at: Utc::now() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// One loaded videos table.
#[derive(Debug, Clone, Serialize)]
pub struct MediaSnapshot {
    pub videos: Vec<MediaRecord>,
    pub fingerprint: String,
    pub loaded_at: DateTime<Utc>,
}

impl MediaSnapshot {
    pub fn new(videos: Vec<MediaRecord>, fingerprint: String) -> Self {
        Self { videos, fingerprint, loaded_at: Utc::now() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// The unit of replacement: both tables from one load.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotPair {
    pub catalog: CatalogSnapshot,
    pub media: MediaSnapshot,
}

impl SnapshotPair {
    pub fn empty() -> Self {
        Self { catalog: CatalogSnapshot::empty(), media: MediaSnapshot::empty() }
    }

    /// True when answering must short-circuit to the data-unavailable reply.
    pub fn is_unusable(&self) -> bool {
        self.catalog.is_empty() || self.media.is_empty()
    }
}
