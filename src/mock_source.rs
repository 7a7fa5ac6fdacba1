//! This module provides a mocked platform calendar, so that tests can script its answers

use std::sync::Mutex;

use async_trait::async_trait;

use crate::calendar::{CalendarEvent, EventSource, SourceError};

/// Describes how a [`MockEventSource`] will behave during a given test.
///
/// So that a function fails _n_ times after _m_ initial successes, set `(m, n)` for the
/// suited parameter.
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, the permission request will report a denial
    pub deny_access: bool,

    pub request_access_behaviour: (u32, u32),
    pub save_event_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            deny_access: false,
            request_access_behaviour: (0, n_fails),
            save_event_behaviour: (0, n_fails),
        }
    }

    pub fn can_request_access(&mut self) -> Result<(), SourceError> {
        decrement(&mut self.request_access_behaviour, "request_access")
    }
    pub fn can_save_event(&mut self) -> Result<(), SourceError> {
        decrement(&mut self.save_event_behaviour, "save_event")
    }
}

/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), SourceError> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 = value.0 - 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else {
        if remaining_failures > 0 {
            value.1 = value.1 - 1;
            log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
            Err(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value).into())
        } else {
            log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
            Ok(())
        }
    }
}

/// An [`EventSource`] backed by nothing, whose answers follow a [`MockBehaviour`].
/// It records every event it was asked to save, so tests can inspect them.
#[derive(Default, Debug)]
pub struct MockEventSource {
    behaviour: Mutex<MockBehaviour>,
    saved_events: Mutex<Vec<CalendarEvent>>,
}

impl MockEventSource {
    pub fn new(behaviour: MockBehaviour) -> Self {
        Self {
            behaviour: Mutex::new(behaviour),
            saved_events: Mutex::new(Vec::new()),
        }
    }

    /// The events successfully saved into this source, in save order
    pub fn saved_events(&self) -> Vec<CalendarEvent> {
        self.saved_events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSource for MockEventSource {
    async fn request_access(&self) -> Result<bool, SourceError> {
        let mut behaviour = self.behaviour.lock().unwrap();
        behaviour.can_request_access()?;
        Ok(behaviour.deny_access == false)
    }

    async fn save_event(&self, event: &CalendarEvent) -> Result<(), SourceError> {
        self.behaviour.lock().unwrap().can_save_event()?;
        self.saved_events.lock().unwrap().push(event.clone());
        Ok(())
    }
}
