pub mod memory_store;
pub mod models;

pub use memory_store::{AppStore, MemoryStore, SharedStore, StoreError};
pub use models::{hash_password, verify_password, Post, User, UserRole};
