use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local bookkeeping entry for an account created through the signup flow.
///
/// The remote service stays the system of record; this value only feeds the
/// persisted `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl AccountRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}
