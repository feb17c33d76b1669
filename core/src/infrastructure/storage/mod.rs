pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileKeyValueStorage;
pub use memory_storage::InMemoryKeyValueStorage;
