/// Field values held for the lifetime of one registration session.
///
/// The record is owned by the front-end and handed to the controller on each
/// submit attempt; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

impl FormInput {
    /// Creates an input with the name field pre-filled from a saved profile.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
