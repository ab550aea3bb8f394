//! Repository Module
//!
//! In-memory collections backed by [`Storage`](crate::db::Storage):
//! one generic [`ReferenceStore`] per reference-data kind plus the
//! [`RoomCatalog`].

mod record;
mod reference;
pub mod room;

pub use record::{ReferenceRecord, SortKey};
pub use reference::ReferenceStore;
pub use room::{RoomCatalog, RoomFilter, RoomSortField};

use serde::{Deserialize, Serialize};

/// One dependent record that keeps a reference record in use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    /// Dependent kind ("room", "room type")
    pub kind: String,
    pub id: String,
    /// Display label ("Room 101")
    pub label: String,
}

/// Result of a usage query for a reference record
///
/// Built by [`crate::services::usage`] from reads across stores; stores
/// only consume it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageReport {
    /// Kind of the referenced record ("area", "view type")
    pub kind: String,
    /// Name of the referenced record
    pub name: String,
    pub dependents: Vec<Dependent>,
}

impl UsageReport {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            dependents: Vec::new(),
        }
    }

    /// Report for a record nothing depends on
    pub fn unused() -> Self {
        Self::new("", "")
    }

    pub fn add(&mut self, kind: impl Into<String>, id: impl Into<String>, label: impl Into<String>) {
        self.dependents.push(Dependent {
            kind: kind.into(),
            id: id.into(),
            label: label.into(),
        });
    }

    pub fn is_in_use(&self) -> bool {
        !self.dependents.is_empty()
    }

    pub fn count(&self) -> usize {
        self.dependents.len()
    }

    /// Human-readable refusal reason
    pub fn reason(&self) -> String {
        if !self.is_in_use() {
            return String::new();
        }
        let labels: Vec<&str> = self.dependents.iter().map(|d| d.label.as_str()).collect();
        format!(
            "Cannot delete {} '{}': still used by {} ({})",
            self.kind,
            self.name,
            plural(self.count(), "record"),
            labels.join(", ")
        )
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("1 {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Outcome of a delete request
///
/// Referential-integrity refusal is a value, not an error: the caller
/// decides how to present it.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome<T> {
    Removed(T),
    InUse(UsageReport),
    NotFound,
}

impl<T> RemoveOutcome<T> {
    pub fn is_removed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_reason() {
        let mut report = UsageReport::new("area", "Garden Wing");
        assert!(!report.is_in_use());
        assert_eq!(report.reason(), "");

        report.add("room", "RM-001", "Room 101");
        report.add("room", "RM-002", "Room 102");
        assert!(report.is_in_use());
        assert_eq!(
            report.reason(),
            "Cannot delete area 'Garden Wing': still used by 2 records (Room 101, Room 102)"
        );
    }
}
