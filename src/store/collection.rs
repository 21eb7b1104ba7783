//! Ordered record collection with sequential identifiers.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Behaviour the store needs from a record.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock.
    #[error("collection '{0}' is poisoned")]
    Poisoned(&'static str),
}

/// An append-only, ordered sequence of records.
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    records: RwLock<Vec<T>>,
}

impl<T: Record> Collection<T> {
    /// Create an empty collection.
    pub fn new(name: &'static str) -> Self {
        Self::with_records(name, Vec::new())
    }

    /// Create a collection pre-populated with `records`, in order.
    pub fn with_records(name: &'static str, records: Vec<T>) -> Self {
        Self {
            name,
            records: RwLock::new(records),
        }
    }

    /// Collection name for logging and metrics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Snapshot of every record in insertion order.
    pub fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.read()?.clone())
    }

    /// Look up a record by identifier.
    pub fn get(&self, id: u64) -> Result<Option<T>, StoreError> {
        Ok(self.read()?.iter().find(|r| r.id() == id).cloned())
    }

    /// Assign the next identifier to `record`, append it, and return the stored copy.
    ///
    /// The identifier is one more than the largest existing one, or 1 when empty.
    pub fn create(&self, mut record: T) -> Result<T, StoreError> {
        let mut records = self.write()?;
        let id = records.iter().map(Record::id).max().map_or(1, |max| max + 1);
        record.set_id(id);
        records.push(record.clone());
        Ok(record)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, StoreError> {
        self.records.read().map_err(|_| StoreError::Poisoned(self.name))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, StoreError> {
        self.records.write().map_err(|_| StoreError::Poisoned(self.name))
    }
}
