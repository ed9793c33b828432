//! Insertion-ordered in-memory collection of one record type.

use std::collections::{btree_map, BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use domain::{DomainError, DomainResult, Record};

use crate::id::IdGenerator;

/// Records keyed by insertion sequence, plus an id → sequence index.
///
/// Sequence numbers only grow, so iteration over `records` is insertion
/// order and a deletion never reorders the survivors.
struct Entries<R> {
    records: BTreeMap<u64, R>,
    index: HashMap<Uuid, u64>,
    next_seq: u64,
}

impl<R> Default for Entries<R> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<R: Record> Entries<R> {
    fn get(&self, id: Uuid) -> Option<&R> {
        self.index.get(&id).and_then(|seq| self.records.get(seq))
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut R> {
        match self.index.get(&id) {
            Some(seq) => self.records.get_mut(seq),
            None => None,
        }
    }

    fn push(&mut self, record: R) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(record.id(), seq);
        self.records.insert(seq, record);
    }

    fn remove(&mut self, id: Uuid) -> Option<R> {
        let seq = self.index.remove(&id)?;
        self.records.remove(&seq)
    }
}

/// Owns every record of one type.
///
/// Each method takes the lock once and releases it before returning, so a
/// read-modify-write such as [`Collection::update`] is a single critical
/// section.
pub struct Collection<R: Record> {
    entries: RwLock<Entries<R>>,
    ids: Arc<dyn IdGenerator>,
}

impl<R: Record> Collection<R> {
    /// Create an empty collection drawing identifiers from `ids`
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            ids,
        }
    }

    /// Validate `draft`, assign identity and store the new record.
    pub fn insert(&self, draft: R::Draft) -> DomainResult<R> {
        let record = R::create(self.ids.next_id(), Utc::now(), draft)?;

        self.entries.write().push(record.clone());
        debug!(kind = R::KIND, id = %record.id(), "Record inserted");

        Ok(record)
    }

    pub fn get(&self, id: Uuid) -> DomainResult<R> {
        self.entries
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(R::KIND, id))
    }

    /// Replace the stored record under `id` keeping its position.
    ///
    /// The replacement must carry the same identity as the stored record.
    pub fn put(&self, id: Uuid, record: R) -> DomainResult<R> {
        let mut entries = self.entries.write();
        let slot = entries
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(R::KIND, id))?;

        if record.id() != id || record.created_at() != slot.created_at() {
            return Err(DomainError::validation("id", "identity fields cannot be changed"));
        }

        *slot = record.clone();
        Ok(record)
    }

    /// Merge `patch` into the stored record and persist the result.
    ///
    /// Lookup, merge and write happen under one write lock. A rejected patch
    /// leaves the stored record untouched.
    pub fn update(&self, id: Uuid, patch: &R::Patch) -> DomainResult<R> {
        let mut entries = self.entries.write();
        let slot = entries
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(R::KIND, id))?;

        let merged = slot.merge(patch)?;
        *slot = merged.clone();
        debug!(kind = R::KIND, id = %id, "Record updated");

        Ok(merged)
    }

    pub fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.entries
            .write()
            .remove(id)
            .map(|_| debug!(kind = R::KIND, id = %id, "Record deleted"))
            .ok_or_else(|| DomainError::not_found(R::KIND, id))
    }

    /// Clone of every record in insertion order
    pub fn list_all(&self) -> Vec<R> {
        self.scan(|records| records.cloned().collect())
    }

    /// Run `f` over the records in insertion order under a read lock.
    pub fn scan<T, F>(&self, f: F) -> T
    where
        F: FnOnce(btree_map::Values<'_, u64, R>) -> T,
    {
        f(self.entries.read().records.values())
    }

    pub fn len(&self) -> usize {
        self.entries.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every record.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.records.clear();
        entries.index.clear();
    }
}
