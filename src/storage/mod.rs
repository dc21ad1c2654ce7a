pub mod json_backend;
pub mod memory;
pub mod record_store;

use crate::core::errors::Result;

/// Abstraction over persistence media holding string values under fixed keys.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`. A reader never observes a partial write.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
pub use record_store::{RecordStore, CATEGORIES_KEY, TRANSACTIONS_KEY};
