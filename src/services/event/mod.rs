//! In-memory event store.
//! Events are filed under their date key and kept in insertion order for the
//! lifetime of the running application.

use std::collections::HashMap;

use crate::models::date_key::DateKey;
use crate::models::event::Event;

/// Date-keyed event lists held in process memory.
///
/// A key is present only once an event has been appended for it; looking up
/// any other key yields an empty slice.
#[derive(Debug, Default)]
pub struct EventStore {
    events: HashMap<DateKey, Vec<Event>>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Events appended for `date`, oldest first
    pub fn lookup(&self, date: &DateKey) -> &[Event] {
        self.events.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append `event` to the end of the list for `date`
    pub fn append(&mut self, date: DateKey, event: Event) {
        self.events.entry(date).or_default().push(event);
    }

    /// Whether any event was ever appended for `date`
    pub fn contains(&self, date: &DateKey) -> bool {
        self.events.contains_key(date)
    }

    /// Number of dates holding events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of events across all dates
    pub fn event_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }
}
