// src/domain/saved.rs
use tracing::debug;

use crate::db::{KeyValueStore, StorageError};

pub const SAVED_KEY: &str = "luxe_saved";

/// What a profile sees before it has ever touched the saved list.
pub const DEFAULT_SAVED: [&str; 4] = ["1", "2", "3", "4"];

/// Ordered listing ids the profile has saved, most recent last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedList {
    ids: Vec<String>,
}

impl SavedList {
    /// A missing or unreadable entry yields the default list.
    pub fn load<S: KeyValueStore + ?Sized>(storage: &S) -> Result<Self, StorageError> {
        let ids = match storage.get_item(SAVED_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids,
                Err(e) => {
                    debug!(error = %e, "saved list unreadable, using defaults");
                    default_ids()
                }
            },
            None => default_ids(),
        };
        Ok(Self { ids })
    }

    #[cfg(test)]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns whether the id is saved afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|s| s != id);
        self.ids.len() != before
    }

    pub fn persist<S: KeyValueStore + ?Sized>(&self, storage: &mut S) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.ids)
            .map_err(|e| StorageError::Backend(format!("serialize saved list failed: {e}")))?;
        storage.set_item(SAVED_KEY, &json)
    }
}

fn default_ids() -> Vec<String> {
    DEFAULT_SAVED.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;

    #[test]
    fn absent_entry_yields_defaults() {
        let s = MemoryStorage::new();
        let saved = SavedList::load(&s).unwrap();
        assert_eq!(saved.ids(), ["1", "2", "3", "4"]);
    }

    #[test]
    fn garbage_entry_yields_defaults() {
        let mut s = MemoryStorage::new();
        s.set_item(SAVED_KEY, "not json").unwrap();
        assert_eq!(SavedList::load(&s).unwrap().len(), 4);
    }

    #[test]
    fn toggle_and_remove_persist() {
        let mut s = MemoryStorage::new();
        let mut saved = SavedList::load(&s).unwrap();

        assert!(!saved.toggle("2"));
        assert!(saved.toggle("6"));
        assert!(saved.remove("1"));
        assert!(!saved.remove("1"));
        saved.persist(&mut s).unwrap();

        let reloaded = SavedList::load(&s).unwrap();
        assert_eq!(reloaded.ids(), ["3", "4", "6"]);
        assert!(reloaded.contains("6"));
        assert!(!reloaded.contains("2"));
    }

    #[test]
    fn emptied_list_stays_empty() {
        let mut s = MemoryStorage::new();
        let mut saved = SavedList::load(&s).unwrap();
        for id in DEFAULT_SAVED {
            saved.remove(id);
        }
        saved.persist(&mut s).unwrap();
        assert!(SavedList::load(&s).unwrap().is_empty());
    }
}
