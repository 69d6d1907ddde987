//! Calendar session: the controller between the UI and the event store.
//!
//! Owns the currently selected day and an injected [`EventStore`]. The UI
//! never touches the store directly; it selects dates, submits the add-event
//! form and renders the day summary produced here.

use chrono::NaiveDate;

use crate::models::date_key::DateKey;
use crate::models::event::{Event, EventError};
use crate::models::locale::Strings;
use crate::services::event::EventStore;

pub struct CalendarSession {
    store: EventStore,
    selected_date: NaiveDate,
    selected_key: DateKey,
}

impl CalendarSession {
    /// Start a session on `today` backed by `store`
    pub fn new(store: EventStore, today: NaiveDate) -> Self {
        Self {
            store,
            selected_date: today,
            selected_key: DateKey::from_date(today),
        }
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.selected_key = DateKey::from_date(date);
        log::debug!("Selected date {}", self.selected_key);
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn selected_key(&self) -> &DateKey {
        &self.selected_key
    }

    pub fn selected_events(&self) -> &[Event] {
        self.store.lookup(&self.selected_key)
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Validate form input and file the event under the selected day.
    pub fn add_event(&mut self, title: &str, description: &str) -> Result<Event, EventError> {
        let date = self.selected_key.clone();
        self.add_event_on(&date, title, description)
    }

    /// Validate form input and file the event under `date`, whatever day is
    /// selected now.
    ///
    /// On an empty title the store is left untouched.
    pub fn add_event_on(
        &mut self,
        date: &DateKey,
        title: &str,
        description: &str,
    ) -> Result<Event, EventError> {
        let event = Event::new(title, description)?;
        self.store.append(date.clone(), event.clone());
        log::info!(
            "Saved event '{}' for {} ({} on this day)",
            event.title(),
            date,
            self.store.lookup(date).len()
        );
        Ok(event)
    }

    /// Text block listing the selected day's events.
    ///
    /// Each event is numbered from 1, followed by its description and a blank
    /// line.
    pub fn day_summary(&self, strings: &Strings) -> String {
        format_day_summary(&self.selected_key, self.selected_events(), strings)
    }
}

pub fn format_day_summary(key: &DateKey, events: &[Event], strings: &Strings) -> String {
    let mut summary = format!("{}:\n", key);
    if events.is_empty() {
        summary.push_str(strings.no_events);
        return summary;
    }

    for (index, event) in events.iter().enumerate() {
        summary.push_str(&format!(
            "{}. {}\n{}\n\n",
            index + 1,
            event.title(),
            event.description()
        ));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::locale::Locale;
    use pretty_assertions::assert_eq;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_new_session_selects_today() {
        let session = CalendarSession::new(EventStore::new(), march(5));
        assert_eq!(session.selected_date(), march(5));
        assert_eq!(session.selected_key().as_str(), "05-03-2024");
        assert!(session.selected_events().is_empty());
    }

    #[test]
    fn test_add_event_files_under_selected_day() {
        let mut session = CalendarSession::new(EventStore::new(), march(5));
        let saved = session.add_event(" Meeting ", "Standup").unwrap();

        assert_eq!(saved.title(), "Meeting");
        assert_eq!(session.selected_events(), &[saved]);

        session.select_date(march(6));
        assert!(session.selected_events().is_empty());
    }

    #[test]
    fn test_add_event_with_blank_title_leaves_store_untouched() {
        let mut session = CalendarSession::new(EventStore::new(), march(5));
        session.add_event("Existing", "").unwrap();

        let result = session.add_event("   ", "ignored");

        assert_eq!(result.unwrap_err(), EventError::EmptyTitle);
        assert_eq!(session.selected_events().len(), 1);
        assert_eq!(session.store().event_count(), 1);
    }

    #[test]
    fn test_add_event_on_keeps_the_dialog_date() {
        let mut session = CalendarSession::new(EventStore::new(), march(5));
        let opened_on = session.selected_key().clone();

        session.select_date(march(6));
        let saved = session.add_event_on(&opened_on, "Meeting", "Standup").unwrap();

        assert_eq!(session.store().lookup(&opened_on), &[saved]);
        assert!(session.selected_events().is_empty());
        assert_eq!(session.selected_key().as_str(), "06-03-2024");
    }

    #[test]
    fn test_add_event_on_with_blank_title_leaves_store_untouched() {
        let mut session = CalendarSession::new(EventStore::new(), march(5));
        let date = DateKey::from_date(march(7));

        assert_eq!(
            session.add_event_on(&date, " ", "ignored"),
            Err(EventError::EmptyTitle)
        );
        assert!(!session.store().contains(&date));
    }

    #[test]
    fn test_day_summary_without_events() {
        let session = CalendarSession::new(EventStore::new(), march(5));
        assert_eq!(
            session.day_summary(Locale::Russian.strings()),
            "05-03-2024:\nМероприятия отсутствуют"
        );
        assert_eq!(
            session.day_summary(Locale::English.strings()),
            "05-03-2024:\nNo events"
        );
    }

    #[test]
    fn test_day_summary_numbers_events() {
        let mut session = CalendarSession::new(EventStore::new(), march(5));
        session.add_event("Meeting", "Standup").unwrap();
        session.add_event("Gym", "").unwrap();

        assert_eq!(
            session.day_summary(Locale::English.strings()),
            "05-03-2024:\n1. Meeting\nStandup\n\n2. Gym\n\n\n"
        );
    }
}
