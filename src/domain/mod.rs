pub mod account;
pub mod form;
pub mod form_errors;
pub mod profile;

pub use account::AccountRecord;
pub use form::FormInput;
pub use form_errors::{FocusTarget, FormErrors};
pub use profile::UserProfile;
