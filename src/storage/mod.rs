pub mod json_backend;
pub mod memory;
pub mod repository;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over simple string-keyed persistence backends.
///
/// Mirrors the browser-storage contract the signup flow was designed
/// against: `get` yields the raw stored string or nothing, `set` replaces it.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::{default_base_dir, JsonStore};
pub use memory::MemoryStore;
pub use repository::{SignupRepository, PROFILE_KEY, USERS_KEY};
