//! Per-symbol archive documents and their persistence.
//!
//! - [`model`] - The `SymbolArchive` document, one per symbol
//! - [`merge`] - Dedup/sort merge rules and derived-field recomputation
//! - [`store`] - Storage trait plus the file-backed implementation
//!
//! A `SymbolArchive` is the unit of ownership: exactly one in-flight harvest
//! task may hold a given symbol's archive, archives never reference each
//! other, and each save replaces the whole document atomically.

pub mod merge;
pub mod model;
pub mod store;

pub use model::SymbolArchive;
pub use store::{ArchiveStore, FileArchiveStore};
