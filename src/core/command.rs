use std::collections::HashMap;
use std::time::Duration;

use crate::gateway::SignUpRequest;

/// Opaque handle identifying one armed timer.
///
/// Handles are never reused within a controller; a fired handle that is no
/// longer tracked is stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPurpose {
    /// Clear the transient status message.
    ClearStatus,
    /// End the post-success smoothing delay and run bookkeeping.
    Settle,
    /// Navigate to the login destination.
    Redirect,
    /// Fail a submission that has been loading for too long.
    RequestTimeout,
}

/// Side effects the controller asks its driver to execute.
///
/// The controller performs synchronous collaborator calls itself; only the
/// suspension points (the remote call and delays) surface as commands, with
/// their completions delivered back as events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the remote account-creation call and report the settled
    /// outcome via `sign_up_settled`.
    CallSignUp(SignUpRequest),
    /// Arm a timer and deliver `timer_fired(timer)` once `after` elapses.
    Schedule { timer: TimerId, after: Duration },
}

/// Timer handles owned by a controller instance.
///
/// At most one timer per purpose is live; re-arming a purpose drops the
/// previous handle so its eventual firing is ignored as stale.
#[derive(Debug, Default)]
pub struct Timers {
    next: u64,
    active: HashMap<TimerId, TimerPurpose>,
}

impl Timers {
    /// Arms a fresh timer for the purpose, cancelling any prior one.
    pub fn arm(&mut self, purpose: TimerPurpose) -> TimerId {
        self.cancel(purpose);
        let id = TimerId(self.next);
        self.next += 1;
        self.active.insert(id, purpose);
        id
    }

    /// Drops the live timer for a purpose, if any.
    pub fn cancel(&mut self, purpose: TimerPurpose) {
        self.active.retain(|_, p| *p != purpose);
    }

    /// Resolves a fired handle, removing it. `None` means stale.
    pub fn take(&mut self, id: TimerId) -> Option<TimerPurpose> {
        self.active.remove(&id)
    }

    /// Drops every live handle.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_armed(&self, purpose: TimerPurpose) -> bool {
        self.active.values().any(|p| *p == purpose)
    }
}
