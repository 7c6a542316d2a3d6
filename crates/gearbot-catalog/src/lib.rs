//! # GearBot Catalog
//!
//! Ingestion and snapshot management for the two source tables (products,
//! training videos).
//!
//! ## Design
//! - **CSV in, snapshots out** — typed row decoding via serde, per-row
//!   validation, unreadable sources degrade to empty snapshots
//! - **Atomic pair replacement** — a query observes one coherent
//!   `(catalog, media)` pair, never a mix of two loads
//! - **Fingerprint-keyed cache** — `refresh()` swaps only when the SHA-256
//!   of a source file changed
//!
//! ```text
//! products.csv ─┐                       ┌─ SnapshotStore::snapshot()
//!               ├─ loader ─ SnapshotPair ┤      (Arc clone per query)
//! videos.csv   ─┘                       └─ SnapshotStore::reload()/refresh()
//! ```

pub mod loader;
pub mod snapshot;
pub mod store;

pub use snapshot::{CatalogSnapshot, MediaSnapshot, SnapshotPair};
pub use store::SnapshotStore;
