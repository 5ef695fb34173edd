// src/db/local_storage.rs
use rusqlite::{params, OptionalExtension};
use thiserror::Error;

use crate::db::connection::Database;
use crate::errors::ServerError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// The subset of the browser `localStorage` API the site relies on.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Process-local store. Nothing survives a restart.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// SQLite-backed store scoped to one browser profile.
#[derive(Debug, Clone)]
pub struct ProfileStorage {
    db: Database,
    profile_hash: [u8; 32],
}

impl ProfileStorage {
    pub fn new(db: Database, profile_hash: [u8; 32]) -> Self {
        Self { db, profile_hash }
    }

    /// Run `f` against this profile's database, translating errors into `StorageError`.
    fn run<F, T>(&self, what: &str, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut rusqlite::Connection) -> rusqlite::Result<T>,
    {
        self.db
            .with_conn(|conn| f(conn).map_err(|e| ServerError::DbError(format!("{what}: {e}"))))
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

impl KeyValueStore for ProfileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let hash = self.profile_hash;
        self.run("select item failed", |conn| {
            conn.query_row(
                "select value from local_storage where profile_hash = ? and key = ?",
                params![hash.as_slice(), key],
                |r| r.get(0),
            )
            .optional()
        })
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let hash = self.profile_hash;
        let now = chrono::Utc::now().timestamp();
        self.run("upsert item failed", |conn| {
            conn.execute(
                r#"
                insert into local_storage (profile_hash, key, value, updated_at)
                values (?, ?, ?, ?)
                on conflict(profile_hash, key) do update set
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![hash.as_slice(), key, value, now],
            )
            .map(|_| ())
        })
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let hash = self.profile_hash;
        self.run("delete item failed", |conn| {
            conn.execute(
                "delete from local_storage where profile_hash = ? and key = ?",
                params![hash.as_slice(), key],
            )
            .map(|_| ())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::init_db;

    fn test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("kv.sqlite3").to_string_lossy());
        init_db(&db).unwrap();
        (dir, db)
    }

    #[test]
    fn memory_storage_round_trip() {
        let mut s = MemoryStorage::new();
        assert_eq!(s.get_item("a").unwrap(), None);

        s.set_item("a", "1").unwrap();
        s.set_item("a", "2").unwrap();
        assert_eq!(s.get_item("a").unwrap().as_deref(), Some("2"));
        assert_eq!(s.len(), 1);

        s.remove_item("a").unwrap();
        s.remove_item("a").unwrap();
        assert_eq!(s.get_item("a").unwrap(), None);
    }

    #[test]
    fn profile_storage_overwrites_in_place() {
        let (_dir, db) = test_db();
        let mut s = ProfileStorage::new(db.clone(), [7u8; 32]);

        s.set_item("luxe_user", "{}").unwrap();
        s.set_item("luxe_user", "{\"x\":1}").unwrap();
        assert_eq!(s.get_item("luxe_user").unwrap().as_deref(), Some("{\"x\":1}"));

        let rows: i64 = db
            .with_conn(|conn| {
                conn.query_row("select count(*) from local_storage", [], |r| r.get(0))
                    .map_err(|e| ServerError::DbError(e.to_string()))
            })
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn profiles_are_isolated() {
        let (_dir, db) = test_db();
        let mut alice = ProfileStorage::new(db.clone(), [1u8; 32]);
        let mut bob = ProfileStorage::new(db, [2u8; 32]);

        alice.set_item("luxe_user", "alice").unwrap();
        assert_eq!(bob.get_item("luxe_user").unwrap(), None);

        bob.set_item("luxe_user", "bob").unwrap();
        alice.remove_item("luxe_user").unwrap();
        assert_eq!(alice.get_item("luxe_user").unwrap(), None);
        assert_eq!(bob.get_item("luxe_user").unwrap().as_deref(), Some("bob"));
    }

    #[test]
    fn missing_table_surfaces_as_backend_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("empty.sqlite3").to_string_lossy());
        let s = ProfileStorage::new(db, [0u8; 32]);

        assert!(matches!(s.get_item("k"), Err(StorageError::Backend(_))));
    }
}
