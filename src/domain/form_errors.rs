/// Inputs that can receive focus after an error-state update, in the fixed
/// priority the form routes assistive technology through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Name,
    Email,
    Password,
    ConfirmPassword,
    General,
}

impl FocusTarget {
    /// Human-readable label used by terminal front-ends.
    pub fn label(self) -> &'static str {
        match self {
            FocusTarget::Name => "Full name",
            FocusTarget::Email => "Email",
            FocusTarget::Password => "Password",
            FocusTarget::ConfirmPassword => "Confirm password",
            FocusTarget::General => "Form",
        }
    }
}

/// Validation and submission failures, one optional message per surface.
///
/// The record is always rebuilt from scratch on each validation pass, never
/// patched field by field, so a fixed field cannot keep a stale message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub general: Option<String>,
}

impl FormErrors {
    /// A record carrying only a general (form-scoped) failure.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            general: Some(message.into()),
            ..Self::default()
        }
    }

    /// True when every surface is valid.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.general.is_none()
    }

    /// The single input that should receive focus, chosen by the fixed
    /// top-to-bottom priority. `None` when the record is empty.
    pub fn focus_target(&self) -> Option<FocusTarget> {
        if self.name.is_some() {
            Some(FocusTarget::Name)
        } else if self.email.is_some() {
            Some(FocusTarget::Email)
        } else if self.password.is_some() {
            Some(FocusTarget::Password)
        } else if self.confirm_password.is_some() {
            Some(FocusTarget::ConfirmPassword)
        } else if self.general.is_some() {
            Some(FocusTarget::General)
        } else {
            None
        }
    }

    /// Field label / message pairs in display order, general last.
    pub fn entries(&self) -> Vec<(FocusTarget, &str)> {
        let mut entries = Vec::new();
        if let Some(message) = &self.name {
            entries.push((FocusTarget::Name, message.as_str()));
        }
        if let Some(message) = &self.email {
            entries.push((FocusTarget::Email, message.as_str()));
        }
        if let Some(message) = &self.password {
            entries.push((FocusTarget::Password, message.as_str()));
        }
        if let Some(message) = &self.confirm_password {
            entries.push((FocusTarget::ConfirmPassword, message.as_str()));
        }
        if let Some(message) = &self.general {
            entries.push((FocusTarget::General, message.as_str()));
        }
        entries
    }
}
