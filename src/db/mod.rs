pub mod connection;
pub mod local_storage;

pub use connection::{init_db, Database};
#[cfg(test)]
pub use local_storage::MemoryStorage;
pub use local_storage::{KeyValueStore, ProfileStorage, StorageError};
