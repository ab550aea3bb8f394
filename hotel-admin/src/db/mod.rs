//! Database Module
//!
//! Handles the embedded redb file and the collections built on top of it

pub mod repository;
mod storage;

pub use storage::{Storage, StorageError, StorageResult};
