//! Pluggable key-value persistence.
//!
//! The original front-ends kept everything in browser local storage: a
//! string-keyed blob store mutated through a shared handle. This module
//! models that as the `KeyValueStore` trait plus two implementations:
//!
//! - `MemoryStore`: shared in-memory map, for tests and embedding
//! - `FileStore`: one JSON file per key under a directory
//!
//! Stores start empty and have no teardown. Methods take `&self` because
//! the storage medium itself is shared mutable state, exactly like
//! `localStorage`.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// A string-keyed blob store with `localStorage` semantics.
pub trait KeyValueStore {
    /// Fetch the value for a key, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a key, overwriting any prior value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
