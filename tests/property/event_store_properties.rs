// Property-based tests for the event store
// Exercises ordering, isolation and duplicate handling with random inputs

use calendar_now::models::date_key::DateKey;
use calendar_now::models::event::Event;
use calendar_now::services::event::EventStore;
use proptest::prelude::*;

fn event_strategy() -> impl Strategy<Value = Event> {
    ("[A-Za-z][A-Za-z ]{0,15}", "[A-Za-z ]{0,20}")
        .prop_map(|(title, description)| Event::new(title, description).unwrap())
}

fn key_strategy() -> impl Strategy<Value = DateKey> {
    (2000..2100i32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| DateKey::from_ymd(year, month, day).unwrap())
}

proptest! {
    /// Property: a key nobody appended to looks up as empty
    #[test]
    fn prop_untouched_key_is_empty(
        appended in prop::collection::vec((key_strategy(), event_strategy()), 0..20),
        probe in key_strategy(),
    ) {
        prop_assume!(appended.iter().all(|(key, _)| key != &probe));

        let mut store = EventStore::new();
        for (key, event) in appended {
            store.append(key, event);
        }

        prop_assert!(store.lookup(&probe).is_empty());
        prop_assert!(!store.contains(&probe));
    }

    /// Property: lookup returns events in exactly the order they were appended
    #[test]
    fn prop_append_preserves_order(
        key in key_strategy(),
        events in prop::collection::vec(event_strategy(), 1..30),
    ) {
        let mut store = EventStore::new();
        for event in &events {
            store.append(key.clone(), event.clone());
        }

        prop_assert_eq!(store.lookup(&key), events.as_slice());
    }

    /// Property: appending to one key never changes another
    #[test]
    fn prop_keys_are_isolated(
        first in key_strategy(),
        second in key_strategy(),
        seed in prop::collection::vec(event_strategy(), 0..5),
        extra in event_strategy(),
    ) {
        prop_assume!(first != second);

        let mut store = EventStore::new();
        for event in &seed {
            store.append(second.clone(), event.clone());
        }
        let before = store.lookup(&second).to_vec();

        store.append(first.clone(), extra);

        prop_assert_eq!(store.lookup(&second), before.as_slice());
    }

    /// Property: appending the same event twice stores it twice
    #[test]
    fn prop_append_is_not_idempotent(key in key_strategy(), event in event_strategy()) {
        let mut store = EventStore::new();
        store.append(key.clone(), event.clone());
        store.append(key.clone(), event.clone());

        prop_assert_eq!(store.lookup(&key), &[event.clone(), event][..]);
    }

    /// Property: keys built from calendar fields always have the dd-mm-yyyy shape
    #[test]
    fn prop_key_shape(key in key_strategy()) {
        let raw = key.as_str();
        prop_assert_eq!(raw.len(), 10);
        prop_assert_eq!(&raw[2..3], "-");
        prop_assert_eq!(&raw[5..6], "-");
    }
}
