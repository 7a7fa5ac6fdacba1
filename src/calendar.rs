//! The platform-calendar boundary.
//!
//! The UI has a single "Add Event to Calendar" button. It inserts one fixed event into the
//! platform default calendar, gated by a one-time permission request. The whole flow is
//! fire-and-forget: outcomes are only logged, nothing is retried or surfaced to the user,
//! and no task data is involved.
//!
//! The platform side is abstracted as an [`EventSource`]; tests (and the demo binary) use
//! the scriptable [`MockEventSource`](crate::mock_source::MockEventSource).

use std::error::Error;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// The error type `EventSource` implementations report.
/// `Send + Sync` because results cross a `tokio::spawn` boundary.
pub type SourceError = Box<dyn Error + Send + Sync>;

/// A calendar event, ready to be inserted into the platform default calendar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    title: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl CalendarEvent {
    pub fn new(title: String, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { title, start, end }
    }

    /// The fixed event the UI button creates: the configured title (see
    /// [`EVENT_TITLE`](crate::config::EVENT_TITLE)), starting at `now` and lasting one hour.
    pub fn default_event(now: DateTime<Utc>) -> Self {
        let title = crate::config::EVENT_TITLE.lock().unwrap().clone();
        let end = now.checked_add_signed(Duration::hours(1)).unwrap_or(now);
        Self::new(title, now, end)
    }

    pub fn title(&self) -> &str              { &self.title }
    pub fn start(&self) -> &DateTime<Utc>    { &self.start }
    pub fn end(&self) -> &DateTime<Utc>      { &self.end   }
}

/// A platform calendar that events can be saved into
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Ask the user for permission to access the calendar.
    /// `Ok(false)` means access was denied without further detail.
    async fn request_access(&self) -> Result<bool, SourceError>;

    /// Insert the event into the platform default calendar
    async fn save_event(&self, event: &CalendarEvent) -> Result<(), SourceError>;
}

/// The one-way link between the UI and a platform calendar.
///
/// Cloning a `CalendarLink` yields a handle to the same underlying source and access state.
#[derive(Clone)]
pub struct CalendarLink {
    source: Arc<dyn EventSource>,

    /// The cached outcome of the permission request (`None` until the first request)
    access: Arc<Mutex<Option<bool>>>,
}

impl CalendarLink {
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        Self {
            source,
            access: Arc::new(Mutex::new(None)),
        }
    }

    /// Ask for calendar access, once.
    ///
    /// The first call forwards to the source and logs the outcome; later calls reuse the
    /// cached result without prompting again. Errors are folded into a denial, they are
    /// logged and never propagated.
    pub async fn request_access(&self) -> bool {
        if let Some(granted) = *self.access.lock().unwrap() {
            return granted;
        }

        let granted = match self.source.request_access().await {
            Ok(true) => {
                log::info!("Calendar access granted");
                true
            },
            Ok(false) => {
                log::warn!("Calendar access denied: Unknown error");
                false
            },
            Err(err) => {
                log::warn!("Calendar access denied: {}", err);
                false
            },
        };
        *self.access.lock().unwrap() = Some(granted);
        granted
    }

    /// Save the default one-hour event (see [`CalendarEvent::default_event`]), fire-and-forget.
    ///
    /// The insert runs as a detached tokio task: the permission gate is applied first, then
    /// the save outcome is logged. Nothing is retried and no failure reaches the caller.
    /// The returned handle can be dropped; awaiting it is only useful to tests.
    pub fn add_default_event(&self, clock: &dyn Clock) -> tokio::task::JoinHandle<()> {
        let event = CalendarEvent::default_event(clock.now());
        let link = self.clone();

        tokio::spawn(async move {
            if link.request_access().await == false {
                // The denial has been logged already
                return;
            }

            match link.source.save_event(&event).await {
                Ok(()) => log::info!("Event saved to calendar"),
                Err(err) => log::warn!("Error saving event to calendar: {}", err),
            }
        })
    }
}
