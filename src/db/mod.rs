pub mod connection;
pub mod keys;
pub mod migrations;
pub mod repository;
pub mod store;

pub use connection::*;
pub use keys::StorageKey;
pub use repository::{StoreRepository, StudyRepository};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
