mod common;

use std::time::Duration;

use signup_core::config::SignupConfig;
use signup_core::core::controller::{
    STATUS_CREATING, STATUS_SUCCESS, STATUS_VALIDATION_FAILED,
};
use signup_core::domain::{FocusTarget, FormInput};
use signup_core::gateway::SignUpResponse;
use signup_core::storage::MemoryStore;

use common::{harness, harness_with, schedules, valid_input, FeedbackEvent};

#[test]
fn every_status_change_is_announced() {
    let mut h = harness();
    let _ = h.controller.attempt_submit(&valid_input());
    let commands = h.controller.sign_up_settled(Ok(SignUpResponse::new("ok")));
    let (settle, _) = schedules(&commands)[0];
    let _ = h.controller.timer_fired(settle);

    assert_eq!(
        h.feedback.announcements(),
        vec![
            Some(STATUS_CREATING.to_string()),
            Some(STATUS_SUCCESS.to_string()),
        ]
    );
}

#[test]
fn validation_failure_announces_and_routes_focus_once() {
    let mut h = harness();
    let input = FormInput {
        name: String::new(),
        password: String::new(),
        confirm_password: String::new(),
        ..valid_input()
    };
    let _ = h.controller.attempt_submit(&input);

    assert_eq!(h.controller.focus(), Some(FocusTarget::Name));
    assert_eq!(h.feedback.focus_moves(), vec![FocusTarget::Name]);
    assert_eq!(
        h.controller.status_message(),
        Some(STATUS_VALIDATION_FAILED)
    );
}

#[test]
fn focus_priority_prefers_the_topmost_errored_field() {
    let mut h = harness();
    let input = FormInput {
        email: "nope".into(),
        confirm_password: "Different1".into(),
        agree_terms: false,
        ..valid_input()
    };
    let _ = h.controller.attempt_submit(&input);
    assert_eq!(h.controller.focus(), Some(FocusTarget::Email));
}

#[test]
fn general_error_focuses_the_form_region() {
    let mut h = harness();
    let _ = h.controller.attempt_submit(&valid_input());
    let _ = h
        .controller
        .sign_up_settled(Ok(SignUpResponse::new("false")));
    assert_eq!(h.controller.focus(), Some(FocusTarget::General));
    assert_eq!(h.feedback.focus_moves(), vec![FocusTarget::General]);
}

#[test]
fn transient_message_clears_after_the_configured_delay() {
    let mut h = harness();
    let commands = h.controller.attempt_submit(&FormInput::default());
    let armed = schedules(&commands);
    assert_eq!(armed.len(), 1);
    let (clear, delay) = armed[0];
    assert_eq!(delay, Duration::from_millis(3000));

    let _ = h.controller.timer_fired(clear);
    assert_eq!(h.controller.status_message(), None);
    assert_eq!(
        h.feedback.announcements().last(),
        Some(&None),
        "the live region is emptied"
    );
}

#[test]
fn a_newer_message_invalidates_the_older_clear_timer() {
    let mut h = harness();
    let first = h.controller.attempt_submit(&FormInput::default());
    let (stale_clear, _) = schedules(&first)[0];

    let second = h.controller.attempt_submit(&FormInput::default());
    let (fresh_clear, _) = schedules(&second)[0];

    // The superseded timer fires without wiping the fresh message.
    let _ = h.controller.timer_fired(stale_clear);
    assert_eq!(
        h.controller.status_message(),
        Some(STATUS_VALIDATION_FAILED)
    );

    let _ = h.controller.timer_fired(fresh_clear);
    assert_eq!(h.controller.status_message(), None);
}

#[test]
fn success_message_is_never_auto_cleared() {
    let mut h = harness_with(MemoryStore::new(), SignupConfig::default());
    let submit_commands = h.controller.attempt_submit(&valid_input());
    let (creating_clear, _) = schedules(&submit_commands)[0];

    let commands = h.controller.sign_up_settled(Ok(SignUpResponse::new("ok")));
    let (settle, _) = schedules(&commands)[0];
    let commands = h.controller.timer_fired(settle);

    // The settle step arms only the redirect, never a clear timer.
    let armed = schedules(&commands);
    assert_eq!(armed.len(), 1);
    assert_eq!(armed[0].1, Duration::from_millis(1500));

    // The in-progress message's clear timer is stale by now.
    let _ = h.controller.timer_fired(creating_clear);
    assert_eq!(h.controller.status_message(), Some(STATUS_SUCCESS));
}

#[test]
fn feedback_events_arrive_in_submission_order() {
    let mut h = harness();
    let _ = h.controller.attempt_submit(&FormInput::default());
    let events = h.feedback.events();
    assert_eq!(
        events,
        vec![
            FeedbackEvent::Focused(FocusTarget::Name),
            FeedbackEvent::Announced(Some(STATUS_VALIDATION_FAILED.to_string())),
        ]
    );
}
