// src/domain/toast.rs
use serde::{Deserialize, Serialize};

use crate::db::{KeyValueStore, StorageError};

pub const TOAST_KEY: &str = "luxe_toast";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// One-shot notification, shown by whichever page renders next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }

    /// Queue for the next page view. A newer toast replaces an unseen one.
    pub fn push<S: KeyValueStore + ?Sized>(&self, storage: &mut S) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)
            .map_err(|e| StorageError::Backend(format!("serialize toast failed: {e}")))?;
        storage.set_item(TOAST_KEY, &json)
    }

    /// Consume the pending toast, if any. Unreadable entries are dropped.
    pub fn take<S: KeyValueStore + ?Sized>(storage: &mut S) -> Result<Option<Toast>, StorageError> {
        let Some(raw) = storage.get_item(TOAST_KEY)? else {
            return Ok(None);
        };
        storage.remove_item(TOAST_KEY)?;
        Ok(serde_json::from_str(&raw).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;

    #[test]
    fn take_consumes_once() {
        let mut s = MemoryStorage::new();
        Toast::success("Message sent!", "soon").push(&mut s).unwrap();

        let t = Toast::take(&mut s).unwrap().unwrap();
        assert_eq!(t.title, "Message sent!");
        assert!(!t.is_destructive());
        assert_eq!(Toast::take(&mut s).unwrap(), None);
    }

    #[test]
    fn newer_toast_wins() {
        let mut s = MemoryStorage::new();
        Toast::success("first", "").push(&mut s).unwrap();
        Toast::failure("second", "").push(&mut s).unwrap();
        let t = Toast::take(&mut s).unwrap().unwrap();
        assert_eq!(t.title, "second");
        assert!(t.is_destructive());
    }

    #[test]
    fn unreadable_entry_is_dropped() {
        let mut s = MemoryStorage::new();
        s.set_item(TOAST_KEY, "{oops").unwrap();
        assert_eq!(Toast::take(&mut s).unwrap(), None);
        assert_eq!(s.len(), 0);
    }
}
