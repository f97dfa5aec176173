pub mod config_repository;
pub mod dummyjson;
pub mod storage;

pub use config_repository::ConfigRepository;
pub use dummyjson::DummyJsonRecipeRepository;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
