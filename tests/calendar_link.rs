//! Tests of the fire-and-forget calendar boundary

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use dayboard::calendar::CalendarLink;
use dayboard::clock::FixedClock;
use dayboard::mock_source::{MockBehaviour, MockEventSource};
use dayboard::TaskStore;

fn a_clock() -> FixedClock {
    FixedClock(Utc.ymd(2023, 6, 14).and_hms(9, 30, 0))
}

#[tokio::test]
async fn test_default_event_is_saved() {
    let _ = env_logger::builder().is_test(true).try_init();
    let clock = a_clock();

    let source = Arc::new(MockEventSource::new(MockBehaviour::new()));
    let link = CalendarLink::new(source.clone());

    link.add_default_event(&clock).await.unwrap();

    let saved = source.saved_events();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title(), "My Event");
    assert_eq!(saved[0].start(), &clock.0);
    assert_eq!(*saved[0].end() - *saved[0].start(), Duration::hours(1));
}

#[tokio::test]
async fn test_denied_access_drops_the_event() {
    let _ = env_logger::builder().is_test(true).try_init();
    let clock = a_clock();

    let behaviour = MockBehaviour {
        deny_access: true,
        ..MockBehaviour::default()
    };
    let source = Arc::new(MockEventSource::new(behaviour));
    let link = CalendarLink::new(source.clone());

    link.add_default_event(&clock).await.unwrap();
    assert!(source.saved_events().is_empty());

    // The denial is cached: later attempts do not prompt or save either
    link.add_default_event(&clock).await.unwrap();
    assert!(source.saved_events().is_empty());
}

#[tokio::test]
async fn test_save_failure_is_absorbed() {
    let _ = env_logger::builder().is_test(true).try_init();
    let clock = a_clock();

    let behaviour = MockBehaviour {
        save_event_behaviour: (0, 1),
        ..MockBehaviour::default()
    };
    let source = Arc::new(MockEventSource::new(behaviour));
    let link = CalendarLink::new(source.clone());

    // The failure is logged, not propagated: the task completes normally
    link.add_default_event(&clock).await.unwrap();
    assert!(source.saved_events().is_empty());

    // There is no retry of the failed save, but a later attempt may succeed on its own
    link.add_default_event(&clock).await.unwrap();
    assert_eq!(source.saved_events().len(), 1);
}

#[tokio::test]
async fn test_access_is_requested_once() {
    let _ = env_logger::builder().is_test(true).try_init();
    let clock = a_clock();

    // Only one permission prompt is allowed; a second one would fail.
    // Since the grant is cached after the first event, no second prompt must ever happen.
    let behaviour = MockBehaviour {
        request_access_behaviour: (1, u32::MAX),
        ..MockBehaviour::default()
    };
    let source = Arc::new(MockEventSource::new(behaviour));
    let link = CalendarLink::new(source.clone());

    link.add_default_event(&clock).await.unwrap();
    link.add_default_event(&clock).await.unwrap();
    link.add_default_event(&clock).await.unwrap();
    assert_eq!(source.saved_events().len(), 3);
}

#[tokio::test]
async fn test_calendar_outcome_never_touches_the_store() {
    let _ = env_logger::builder().is_test(true).try_init();
    let clock = a_clock();
    let mut store = TaskStore::new();

    store.add_task("Buy milk", 2, &clock);
    store.add_task("Call the bank", 4, &clock);

    let source = Arc::new(MockEventSource::new(MockBehaviour::fail_now(5)));
    let link = CalendarLink::new(source.clone());
    link.add_default_event(&clock).await.unwrap();

    // Whatever happened on the calendar side, the tasks are exactly as they were
    let names: Vec<&str> = store.tasks().iter().map(|task| task.name()).collect();
    assert_eq!(names, vec!["Buy milk", "Call the bank"]);
}
