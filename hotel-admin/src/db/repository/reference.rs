//! Generic reference-data store

use shared::error::{AppError, AppResult};
use shared::query::ListQuery;
use shared::util::{now_millis, parse_sequence, sequential_id};

use super::record::ReferenceRecord;
use super::{RemoveOutcome, UsageReport};
use crate::db::Storage;

/// Owns one reference-data collection and persists it after every mutation
pub struct ReferenceStore<T: ReferenceRecord> {
    records: Vec<T>,
    /// Last issued id sequence; never decreases, so ids are never reused
    last_seq: u64,
    storage: Storage,
}

impl<T: ReferenceRecord> ReferenceStore<T> {
    /// Load the collection persisted under `T::STORAGE_KEY`
    pub fn load(storage: Storage) -> AppResult<Self> {
        let records: Vec<T> = storage.load(T::STORAGE_KEY)?;
        let highest = records
            .iter()
            .filter_map(|r| parse_sequence(T::ID_PREFIX, r.id()))
            .max()
            .unwrap_or(0);
        let last_seq = storage.sequence(T::STORAGE_KEY)?.max(highest);

        tracing::debug!(kind = T::KIND, count = records.len(), last_seq, "Reference store loaded");
        Ok(Self {
            records,
            last_seq,
            storage,
        })
    }

    /// Records matching `query`, insertion order unless a known sort field is given
    pub fn list(&self, query: &ListQuery) -> Vec<T> {
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut items: Vec<T> = self
            .records
            .iter()
            .filter(|r| needle.as_deref().is_none_or(|n| r.matches_search(n)))
            .cloned()
            .collect();

        if let Some(field) = query.sort.as_deref() {
            if self.records.iter().any(|r| r.sort_key(field).is_some()) {
                let direction = query.direction;
                // stable: ties keep insertion order in both directions
                items.sort_by(|a, b| match (a.sort_key(field), b.sort_key(field)) {
                    (Some(ka), Some(kb)) => direction.apply(ka.compare(&kb)),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                });
            } else {
                tracing::debug!(kind = T::KIND, field, "Unknown sort field, keeping insertion order");
            }
        }

        items
    }

    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&T> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// All records in insertion order
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and append a new record
    pub fn create(&mut self, data: T::Create) -> AppResult<T> {
        let seq = self.last_seq + 1;
        let record = T::from_create(sequential_id(T::ID_PREFIX, seq), data, now_millis());

        record.validate()?;
        self.check_unique(&record)?;

        self.records.push(record.clone());
        if let Err(e) = self
            .storage
            .save_with_sequence(T::STORAGE_KEY, &self.records, seq)
        {
            self.records.pop();
            return Err(e.into());
        }
        self.last_seq = seq;

        tracing::info!(kind = T::KIND, id = record.id(), name = record.name(), "Record created");
        Ok(record)
    }

    /// Merge `data` into the record with `id`; `Ok(None)` when it does not exist
    pub fn update(&mut self, id: &str, data: T::Update) -> AppResult<Option<T>> {
        let Some(index) = self.position(id) else {
            tracing::debug!(kind = T::KIND, id, "Update skipped, record not found");
            return Ok(None);
        };

        let previous = self.records[index].clone();
        let mut candidate = previous.clone();
        candidate.apply_update(data);
        candidate.set_updated_at(now_millis().max(previous.updated_at()));

        candidate.validate()?;
        self.check_unique(&candidate)?;

        self.records[index] = candidate.clone();
        if let Err(e) = self.persist() {
            self.records[index] = previous;
            return Err(e);
        }

        tracing::info!(kind = T::KIND, id, "Record updated");
        Ok(Some(candidate))
    }

    /// Delete the record unless `usage` reports dependents
    ///
    /// The store cannot see other collections; the caller computes `usage`
    /// with [`crate::services::usage`].
    pub fn remove(&mut self, id: &str, usage: &UsageReport) -> AppResult<RemoveOutcome<T>> {
        let Some(index) = self.position(id) else {
            return Ok(RemoveOutcome::NotFound);
        };

        if usage.is_in_use() {
            tracing::warn!(
                kind = T::KIND,
                id,
                dependents = usage.count(),
                "Delete refused, record in use"
            );
            return Ok(RemoveOutcome::InUse(usage.clone()));
        }

        let removed = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }

        tracing::info!(kind = T::KIND, id, name = removed.name(), "Record deleted");
        Ok(RemoveOutcome::Removed(removed))
    }

    /// Look up a record or fail with the kind's not-found code
    pub fn require(&self, id: &str) -> AppResult<&T> {
        self.get_by_id(id).ok_or_else(|| {
            AppError::with_message(T::NOT_FOUND, format!("{} {} not found", T::KIND, id))
                .with_detail("id", id)
        })
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn check_unique(&self, candidate: &T) -> AppResult<()> {
        let mut others = self.records.iter().filter(|r| r.id() != candidate.id());

        if others.clone().any(|r| r.name() == candidate.name()) {
            tracing::warn!(kind = T::KIND, name = candidate.name(), "Duplicate name rejected");
            return Err(AppError::with_message(
                T::NAME_EXISTS,
                format!("A {} named '{}' already exists", T::KIND, candidate.name()),
            )
            .with_detail("field", "name"));
        }

        candidate.check_conflicts(&mut others)
    }

    fn persist(&self) -> AppResult<()> {
        self.storage.save(T::STORAGE_KEY, &self.records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use shared::models::{StandardRoomType, StandardRoomTypeCreate, StandardRoomTypeUpdate};
    use shared::query::SortDirection;

    fn store() -> ReferenceStore<StandardRoomType> {
        ReferenceStore::load(Storage::open_in_memory().unwrap()).unwrap()
    }

    fn srt(name: &str, capacity: u32) -> StandardRoomTypeCreate {
        StandardRoomTypeCreate {
            name: name.into(),
            description: format!("{name} description"),
            default_capacity: capacity,
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = store();
        let a = store.create(srt("Single Room", 1)).unwrap();
        let b = store.create(srt("Double Room", 2)).unwrap();

        assert_eq!(a.id, "SRT-001");
        assert_eq!(b.id, "SRT-002");
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = store();
        store.create(srt("Single Room", 1)).unwrap();
        let b = store.create(srt("Double Room", 2)).unwrap();
        store.remove(&b.id, &UsageReport::unused()).unwrap();

        let c = store.create(srt("Suite", 3)).unwrap();
        assert_eq!(c.id, "SRT-003");
        assert_ne!(c.id, b.id);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut store = store();
        store.create(srt("Single Room", 1)).unwrap();

        let err = store.create(srt("Single Room", 2)).unwrap_err();
        assert_eq!(err.code, ErrorCode::StandardRoomTypeNameExists);
        assert_eq!(store.len(), 1);

        // case-sensitive comparison
        assert!(store.create(srt("single room", 1)).is_ok());
    }

    #[test]
    fn test_non_positive_capacity_rejected() {
        let mut store = store();
        let err = store.create(srt("Empty Room", 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_keeps_created_at() {
        let mut store = store();
        let created = store.create(srt("Single Room", 1)).unwrap();

        let updated = store
            .update(
                &created.id,
                StandardRoomTypeUpdate {
                    description: Some("One bed".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.description, "One bed");
    }

    #[test]
    fn test_update_uniqueness_excludes_self() {
        let mut store = store();
        let single = store.create(srt("Single Room", 1)).unwrap();
        store.create(srt("Double Room", 2)).unwrap();

        let same_name = StandardRoomTypeUpdate {
            name: Some("Single Room".into()),
            ..Default::default()
        };
        assert!(store.update(&single.id, same_name).unwrap().is_some());

        let taken = StandardRoomTypeUpdate {
            name: Some("Double Room".into()),
            ..Default::default()
        };
        let err = store.update(&single.id, taken).unwrap_err();
        assert_eq!(err.code, ErrorCode::StandardRoomTypeNameExists);
        assert_eq!(store.get_by_id(&single.id).unwrap().name, "Single Room");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = store();
        store.create(srt("Single Room", 1)).unwrap();
        let result = store
            .update("SRT-999", StandardRoomTypeUpdate::default())
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_refused_when_in_use() {
        let mut store = store();
        let single = store.create(srt("Single Room", 1)).unwrap();

        let mut usage = UsageReport::new("standard room type", "Single Room");
        usage.add("room type", "RT-001", "Economy Single");

        let outcome = store.remove(&single.id, &usage).unwrap();
        assert_eq!(outcome, RemoveOutcome::InUse(usage));
        assert_eq!(store.len(), 1);

        let outcome = store.remove(&single.id, &UsageReport::unused()).unwrap();
        assert!(outcome.is_removed());
        assert!(store.is_empty());

        let outcome = store.remove(&single.id, &UsageReport::unused()).unwrap();
        assert_eq!(outcome, RemoveOutcome::NotFound);
    }

    #[test]
    fn test_list_search_and_sort() {
        let mut store = store();
        store.create(srt("Suite", 3)).unwrap();
        store.create(srt("Double Room", 2)).unwrap();
        store.create(srt("Single Room", 1)).unwrap();
        store.create(srt("suite", 2)).unwrap();

        let all = store.list(&ListQuery::all());
        let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Suite", "Double Room", "Single Room", "suite"]);

        let rooms = store.list(&ListQuery::all().search("ROOM"));
        assert_eq!(rooms.len(), 2);

        let asc = store.list(&ListQuery::all().order_by("name", SortDirection::Asc));
        let desc = store.list(&ListQuery::all().order_by("name", SortDirection::Desc));
        let asc_ids: Vec<&str> = asc.iter().map(|r| r.id.as_str()).collect();
        let mut desc_ids: Vec<&str> = desc.iter().map(|r| r.id.as_str()).collect();
        desc_ids.reverse();
        assert_eq!(asc_ids, desc_ids);
        let asc_names: Vec<&str> = asc.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(asc_names, vec!["Double Room", "Single Room", "Suite", "suite"]);

        let by_capacity = store.list(
            &ListQuery::all().order_by("default_capacity", SortDirection::Desc),
        );
        assert_eq!(by_capacity[0].name, "Suite");

        let unknown = store.list(&ListQuery::all().order_by("color", SortDirection::Desc));
        assert_eq!(unknown[0].name, "Suite");
    }

    #[test]
    fn test_reload_from_storage() {
        let storage = Storage::open_in_memory().unwrap();
        {
            let mut store = ReferenceStore::<StandardRoomType>::load(storage.clone()).unwrap();
            store.create(srt("Single Room", 1)).unwrap();
            let double = store.create(srt("Double Room", 2)).unwrap();
            store.remove(&double.id, &UsageReport::unused()).unwrap();
        }

        let mut store = ReferenceStore::<StandardRoomType>::load(storage).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.create(srt("Suite", 3)).unwrap().id, "SRT-003");
        assert_eq!(store.find_by_name("Single Room").unwrap().id, "SRT-001");
        assert_eq!(
            store.require("SRT-404").unwrap_err().code,
            ErrorCode::StandardRoomTypeNotFound
        );
    }
}
