//! A walkthrough of the dayboard API: fill a store, show the week, push a calendar event.

use std::sync::Arc;

use dayboard::calendar::CalendarLink;
use dayboard::clock::{Clock, SystemClock};
use dayboard::mock_source::{MockBehaviour, MockEventSource};
use dayboard::utils;
use dayboard::weekday;
use dayboard::TaskStore;

#[tokio::main]
async fn main() {
    env_logger::init();

    let clock = SystemClock;
    let mut store = TaskStore::new();

    println!("Today is {}", utils::format_day(&clock.now()));
    println!("You can set the RUST_LOG environment variable to display more info.");
    println!();

    let today = weekday::day_index_of(&clock.now());
    store.add_task("Buy milk", today, &clock);
    store.add_task("Water the plants", (today + 2) % 7, &clock);
    store.add_task("Call the bank", (today + 2) % 7, &clock);

    // Empty names are ignored, just like an empty input field
    store.add_task("", today, &clock);

    utils::print_week(&store, &clock);

    println!();
    println!("As JSON:");
    println!("{}", utils::dump_json(&store));

    // There is no platform calendar around here, a mock stands in for it
    let source = Arc::new(MockEventSource::new(MockBehaviour::new()));
    let link = CalendarLink::new(source.clone());
    let handle = link.add_default_event(&clock);
    let _ = handle.await;

    println!();
    println!("{} event(s) pushed to the calendar.", source.saved_events().len());
}
