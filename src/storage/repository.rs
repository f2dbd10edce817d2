use tracing::warn;

use crate::domain::{AccountRecord, UserProfile};

use super::{KeyValueStore, Result};

/// Store key holding the JSON-encoded saved profile.
pub const PROFILE_KEY: &str = "userProfile";
/// Store key holding the JSON-encoded account collection.
pub const USERS_KEY: &str = "users";

/// Typed access to the signup flow's two persisted collections.
///
/// Wraps the raw key-value collaborator so callers never touch keys or JSON
/// encoding directly.
pub struct SignupRepository {
    store: Box<dyn KeyValueStore>,
}

impl SignupRepository {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the saved profile, if any.
    ///
    /// A malformed entry is logged and treated as absent; initialization
    /// must not fail because of stale profile data.
    pub fn load_profile(&self) -> Option<UserProfile> {
        let raw = match self.store.get(PROFILE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key = PROFILE_KEY, %err, "failed to read saved profile");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(key = PROFILE_KEY, %err, "ignoring malformed saved profile");
                None
            }
        }
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, &json)
    }

    /// Loads the persisted account collection, defaulting to empty when the
    /// key is absent. Malformed data is an error: the caller surfaces it as
    /// a submission failure rather than silently dropping records.
    pub fn load_users(&self) -> Result<Vec<AccountRecord>> {
        match self.store.get(USERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn save_users(&self, users: &[AccountRecord]) -> Result<()> {
        let json = serde_json::to_string(users)?;
        self.store.set(USERS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};

    #[test]
    fn missing_users_key_defaults_to_empty() {
        let repo = SignupRepository::new(Box::new(MemoryStore::new()));
        assert!(repo.load_users().unwrap().is_empty());
    }

    #[test]
    fn users_roundtrip_preserves_records() {
        let repo = SignupRepository::new(Box::new(MemoryStore::new()));
        let records = vec![AccountRecord::new("Ada Lovelace", "ada@example.com")];
        repo.save_users(&records).unwrap();
        let loaded = repo.load_users().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].email, "ada@example.com");
    }

    #[test]
    fn malformed_profile_is_treated_as_absent() {
        let store = MemoryStore::new().with_entry(PROFILE_KEY, "{not json");
        let repo = SignupRepository::new(Box::new(store));
        assert!(repo.load_profile().is_none());
    }

    #[test]
    fn malformed_users_surface_as_an_error() {
        let store = MemoryStore::new().with_entry(USERS_KEY, "{not json");
        let repo = SignupRepository::new(Box::new(store));
        assert!(repo.load_users().is_err());
    }

    #[test]
    fn profile_roundtrip_keeps_camel_case_keys() {
        let store = MemoryStore::new();
        let repo = SignupRepository::new(Box::new(store.clone()));
        let profile = UserProfile {
            display_name: "Ada".into(),
            avatar: None,
            language: "en".into(),
            location: "London".into(),
            accessibility_needs: "screen-reader".into(),
            bio: String::new(),
        };
        repo.save_profile(&profile).unwrap();
        let raw = store.get(PROFILE_KEY).unwrap().expect("stored profile");
        assert!(raw.contains("\"displayName\""));
        assert!(raw.contains("\"accessibilityNeeds\""));
        let loaded = repo.load_profile().expect("profile present");
        assert_eq!(loaded, profile);
    }
}
