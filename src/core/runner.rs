//! Blocking driver for the submission controller.
//!
//! Executes the controller's commands in arrival order: remote calls run
//! inline against the gateway, timers are parked in a due-time queue and
//! fired after sleeping out their delay. Suitable for terminal front-ends;
//! tests usually drive the controller directly instead.

use std::collections::VecDeque;
use std::thread;
use std::time::Instant;

use crate::domain::FormInput;
use crate::gateway::AccountGateway;

use super::command::{Command, TimerId};
use super::controller::SubmissionController;

pub struct SignupRunner<G: AccountGateway> {
    controller: SubmissionController,
    gateway: G,
    queue: Vec<(Instant, TimerId)>,
}

impl<G: AccountGateway> SignupRunner<G> {
    pub fn new(controller: SubmissionController, gateway: G) -> Self {
        Self {
            controller,
            gateway,
            queue: Vec::new(),
        }
    }

    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    /// Submits the input and drives the flow until every armed timer has
    /// fired and no work remains.
    pub fn submit(&mut self, input: &FormInput) {
        let seed = self.controller.attempt_submit(input);
        self.pump(seed);
    }

    /// Ends the session, dropping any timers still queued.
    pub fn teardown(&mut self) {
        self.controller.teardown();
        self.queue.clear();
    }

    fn pump(&mut self, seed: Vec<Command>) {
        let mut work: VecDeque<Command> = seed.into();
        loop {
            while let Some(command) = work.pop_front() {
                match command {
                    Command::CallSignUp(request) => {
                        let outcome = self.gateway.sign_up(&request);
                        work.extend(self.controller.sign_up_settled(outcome));
                    }
                    Command::Schedule { timer, after } => {
                        self.queue.push((Instant::now() + after, timer));
                    }
                }
            }

            self.queue.sort_by_key(|(due, _)| *due);
            if self.queue.is_empty() {
                break;
            }
            let (due, timer) = self.queue.remove(0);
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
            work.extend(self.controller.timer_fired(timer));
        }
    }
}
