//! Entry list repository.
//!
//! # Responsibility
//! - Load and rewrite the whole entry list stored under `entries`.
//! - Apply exactly one positional change per call.
//!
//! # Invariants
//! - New entries are inserted at index 0 (newest first).
//! - Each mutation holds the store lock across its read and its write.
//! - Indexes refer to the list as read inside that same lock.

use crate::model::entry::Entry;
use crate::repo::kv_repo::{KeyValueStore, SharedStore, ENTRIES_KEY};
use crate::repo::{RepoError, RepoResult};
use log::debug;

/// Repository over the persisted entry list.
pub struct EntryRepository<S> {
    store: SharedStore<S>,
}

impl<S> Clone for EntryRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: KeyValueStore> EntryRepository<S> {
    pub fn new(store: SharedStore<S>) -> Self {
        Self { store }
    }

    /// Returns a full snapshot, newest first. Missing key means empty.
    pub async fn list(&self) -> RepoResult<Vec<Entry>> {
        let store = self.store.lock().await;
        read_entries(&*store)
    }

    /// Validates and inserts `entry` at the head of the list.
    ///
    /// Returns the list length after insertion.
    pub async fn prepend(&self, entry: Entry) -> RepoResult<usize> {
        entry.validate()?;

        let mut store = self.store.lock().await;
        let mut entries = read_entries(&*store)?;
        entries.insert(0, entry);
        write_entries(&mut *store, &entries)?;

        debug!(
            "event=entry_create module=repo status=ok count={}",
            entries.len()
        );
        Ok(entries.len())
    }

    /// Replaces the title of the entry at `index`; blank input clears it.
    pub async fn rename(&self, index: usize, new_title: &str) -> RepoResult<Entry> {
        let mut store = self.store.lock().await;
        let mut entries = read_entries(&*store)?;
        let len = entries.len();
        let entry = entries
            .get_mut(index)
            .ok_or(RepoError::EntryIndexOutOfRange { index, len })?;
        entry.rename(new_title);
        let renamed = entry.clone();
        write_entries(&mut *store, &entries)?;

        debug!(
            "event=entry_rename module=repo status=ok index={} has_title={}",
            index,
            renamed.has_title()
        );
        Ok(renamed)
    }

    /// Removes the entry at `index`, preserving the order of the rest.
    pub async fn delete(&self, index: usize) -> RepoResult<Entry> {
        let mut store = self.store.lock().await;
        let mut entries = read_entries(&*store)?;
        if index >= entries.len() {
            return Err(RepoError::EntryIndexOutOfRange {
                index,
                len: entries.len(),
            });
        }
        let removed = entries.remove(index);
        write_entries(&mut *store, &entries)?;

        debug!(
            "event=entry_delete module=repo status=ok index={} count={}",
            index,
            entries.len()
        );
        Ok(removed)
    }
}

fn read_entries<S: KeyValueStore>(store: &S) -> RepoResult<Vec<Entry>> {
    match store.get_item(ENTRIES_KEY)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|err| {
            RepoError::InvalidData(format!("`{ENTRIES_KEY}` is not an entry list: {err}"))
        }),
        None => Ok(Vec::new()),
    }
}

fn write_entries<S: KeyValueStore>(store: &mut S, entries: &[Entry]) -> RepoResult<()> {
    let encoded = serde_json::to_string(entries)?;
    store.set_item(ENTRIES_KEY, &encoded)
}
