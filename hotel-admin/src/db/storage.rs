//! redb-based durable storage for store collections
//!
//! Every store persists its whole collection as one JSON array under a
//! named key, and reloads it verbatim on the next start.

use redb::{
    Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Collections table: key = storage key, value = JSON array of records
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Id sequences: key = storage key, value = last issued sequence number
const SEQUENCES_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequences");

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Serialization(e) => {
                tracing::error!(error = %e, "Stored collection could not be decoded");
                AppError::with_message(ErrorCode::StorageCorrupted, e.to_string())
            }
            other => {
                tracing::error!(error = %other, "Storage operation failed");
                AppError::database(other.to_string())
            }
        }
    }
}

/// Durable collection storage shared by all stores
#[derive(Clone)]
pub struct Storage {
    db: Arc<Database>,
}

impl Storage {
    /// Open or create database
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db =
            Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
            let _ = write_txn.open_table(SEQUENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Load a collection; a missing key yields an empty collection
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;

        match table.get(key)? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace a collection in a single write transaction
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) -> StorageResult<()> {
        let value = serde_json::to_vec(records)?;

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(key, value.as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(key, count = records.len(), "Collection persisted");
        Ok(())
    }

    /// Replace a collection and advance its id sequence atomically
    pub fn save_with_sequence<T: Serialize>(
        &self,
        key: &str,
        records: &[T],
        sequence: u64,
    ) -> StorageResult<()> {
        let value = serde_json::to_vec(records)?;

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(key, value.as_slice())?;

            let mut seq_table = txn.open_table(SEQUENCES_TABLE)?;
            seq_table.insert(key, sequence)?;
        }
        txn.commit()?;

        tracing::debug!(key, count = records.len(), sequence, "Collection persisted");
        Ok(())
    }

    /// Last issued id sequence of a collection (0 when none was issued)
    pub fn sequence(&self, key: &str) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SEQUENCES_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value()).unwrap_or(0))
    }

    /// Remove a collection entirely
    pub fn clear(&self, key: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(COLLECTIONS_TABLE)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Keys of all persisted collections
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;

        let mut keys = Vec::with_capacity(table.len()? as usize);
        for result in table.iter()? {
            let (key, _) = result?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }
}
