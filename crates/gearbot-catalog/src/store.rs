//! Atomic snapshot store with fingerprint-gated refresh.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use gearbot_core::config::DataConfig;

use crate::loader;
use crate::snapshot::SnapshotPair;

/// Holds the current `(catalog, media)` snapshot pair.
///
/// Queries take a cheap `Arc` clone; `reload` builds the new pair outside the
/// lock and swaps it in one write, so an in-flight query observes either the
/// old pair or the new pair in full, never a mix.
pub struct SnapshotStore {
    products_path: PathBuf,
    videos_path: PathBuf,
    current: RwLock<Arc<SnapshotPair>>,
}

impl SnapshotStore {
    /// Create an empty store; call `reload` to populate it.
    pub fn new(data: &DataConfig) -> Self {
        Self {
            products_path: PathBuf::from(shellexpand::tilde(&data.products_path).as_ref()),
            videos_path: PathBuf::from(shellexpand::tilde(&data.videos_path).as_ref()),
            current: RwLock::new(Arc::new(SnapshotPair::empty())),
        }
    }

    /// Create a store and load both tables immediately.
    pub fn open(data: &DataConfig) -> Self {
        let store = Self::new(data);
        store.reload();
        store
    }

    /// Current snapshot pair — the caller's read-only view.
    pub fn snapshot(&self) -> Arc<SnapshotPair> {
        self.current.read().unwrap().clone()
    }

    /// Load both tables and swap the pair atomically.
    pub fn reload(&self) -> Arc<SnapshotPair> {
        let pair = Arc::new(SnapshotPair {
            catalog: loader::load_catalog(&self.products_path),
            media: loader::load_media(&self.videos_path),
        });
        *self.current.write().unwrap() = pair.clone();
        pair
    }

    /// Re-hash the sources and reload only when something changed.
    /// Returns true when a new pair was installed.
    pub fn refresh(&self) -> bool {
        let current = self.snapshot();
        let catalog_fp = loader::source_fingerprint(&self.products_path).unwrap_or_default();
        let media_fp = loader::source_fingerprint(&self.videos_path).unwrap_or_default();
        if catalog_fp == current.catalog.fingerprint && media_fp == current.media.fingerprint {
            return false;
        }
        tracing::info!("data sources changed, reloading snapshots");
        self.reload();
        true
    }
}
