//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The title given to calendar events created by [`CalendarLink::add_default_event`](crate::calendar::CalendarLink::add_default_event).
/// Feel free to override it when initing this library.
pub static EVENT_TITLE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("My Event".to_string())));
