pub mod command;
pub mod controller;
pub mod feedback;
pub mod runner;

pub use command::{Command, TimerId, TimerPurpose};
pub use controller::{Status, SubmissionController};
pub use feedback::{Feedback, Navigator, Notification, Notifier};
pub use runner::SignupRunner;
