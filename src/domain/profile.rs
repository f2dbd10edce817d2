use serde::{Deserialize, Serialize};

/// Saved profile loaded once at session start.
///
/// Owned by the persistence layer; the signup flow reads it to pre-fill the
/// name field and writes back an updated `display_name` after a successful
/// registration. Keys stay camelCase to match the stored format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    pub avatar: Option<String>,
    pub language: String,
    pub location: String,
    pub accessibility_needs: String,
    pub bio: String,
}

impl UserProfile {
    /// Returns a copy carrying a new display name.
    pub fn with_display_name(&self, name: impl Into<String>) -> Self {
        Self {
            display_name: name.into(),
            ..self.clone()
        }
    }
}
