//! # GearBot Engine
//!
//! The pure matching-and-response core: tokenize a free-text query, filter
//! the catalog snapshot, join matched products to their videos, compose one
//! markdown answer.
//!
//! ```text
//! "what helps my core strength?"
//!   ↓ tokenize            → {"what", "helps", "core", "strength"}
//!   ↓ find_matches        → products whose name+keywords contain any keyword
//!   ↓ Responder           → per-product block: heading, shop link, ≤3 videos
//!   ↓                       blocks joined by "---", fixed fallbacks otherwise
//! one markdown reply string
//! ```
//!
//! No I/O, no shared mutable state: every `answer` call is a pure function of
//! the query and the snapshot pair it is handed, so concurrent calls over the
//! same snapshots are safe by construction.

pub mod matcher;
pub mod responder;
pub mod tokenizer;

pub use matcher::{comparison_text, find_matches};
pub use responder::{DATA_UNAVAILABLE, NO_MATCH, Responder};
pub use tokenizer::tokenize;
