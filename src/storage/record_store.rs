//! Typed access to the transaction and category records.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::core::errors::{Result, TrackerError};
use crate::domain::{default_categories, Category, Transaction};

use super::KeyValueStore;

pub const TRANSACTIONS_KEY: &str = "expense-tracker-transactions";
pub const CATEGORIES_KEY: &str = "expense-tracker-categories";

struct Loaded<T> {
    records: Vec<T>,
    rejected: Vec<(usize, serde_json::Error)>,
}

/// Loads and saves the two persisted record lists over a [`KeyValueStore`].
pub struct RecordStore {
    backend: Box<dyn KeyValueStore>,
}

impl RecordStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Seeds the default categories unless a category record already exists.
    /// Returns `true` only for the call that wrote them.
    pub fn initialize(&self) -> Result<bool> {
        if self.backend.contains(CATEGORIES_KEY)? {
            return Ok(false);
        }
        let defaults = default_categories();
        self.save_categories(&defaults)?;
        info!(count = defaults.len(), "seeded default categories");
        Ok(true)
    }

    /// All persisted transactions. Missing or unreadable data reads as empty, and
    /// individual records that cannot be parsed are skipped.
    pub fn load_transactions(&self) -> Vec<Transaction> {
        match self.read_records(TRANSACTIONS_KEY) {
            Ok(loaded) => {
                for (index, err) in &loaded.rejected {
                    warn!(index, error = %err, "skipping unreadable transaction");
                }
                loaded.records
            }
            Err(err) => {
                warn!(error = %err, "discarding unreadable transaction record");
                Vec::new()
            }
        }
    }

    /// Strict variant of [`Self::load_transactions`]: any read failure or unparseable
    /// record is an error, so the result is safe to write back.
    pub fn try_load_transactions(&self) -> Result<Vec<Transaction>> {
        let loaded = self.read_records(TRANSACTIONS_KEY)?;
        match loaded.rejected.first() {
            None => Ok(loaded.records),
            Some((index, err)) => Err(TrackerError::CorruptData(format!(
                "{} of {} transaction records unreadable (first at index {index}: {err})",
                loaded.rejected.len(),
                loaded.records.len() + loaded.rejected.len()
            ))),
        }
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.write_list(TRANSACTIONS_KEY, transactions)
    }

    /// The persisted categories, seeding and persisting the defaults first if none exist.
    /// An existing but corrupt record reads as empty and is left untouched.
    pub fn load_categories(&self) -> Result<Vec<Category>> {
        if self.initialize()? {
            return Ok(default_categories());
        }
        match self.read_list(CATEGORIES_KEY) {
            Ok(categories) => Ok(categories.unwrap_or_default()),
            Err(err) => {
                warn!(error = %err, "discarding unreadable category record");
                Ok(Vec::new())
            }
        }
    }

    pub fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.write_list(CATEGORIES_KEY, categories)
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        match self.backend.get(key)? {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    fn read_records<T: DeserializeOwned>(&self, key: &str) -> Result<Loaded<T>> {
        let values: Vec<Value> = self.read_list(key)?.unwrap_or_default();
        let mut loaded = Loaded {
            records: Vec::with_capacity(values.len()),
            rejected: Vec::new(),
        };
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value(value) {
                Ok(record) => loaded.records.push(record),
                Err(err) => loaded.rejected.push((index, err)),
            }
        }
        Ok(loaded)
    }

    fn write_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.backend.set(key, &json)
    }
}
