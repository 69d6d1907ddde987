use chrono::NaiveDate;

use crate::models::date_key::DateKey;
use crate::models::event::EventError;
use crate::models::locale::Strings;

/// State for the add-event dialog
#[derive(Debug)]
pub struct EventDialogState {
    /// Day the dialog was opened for; the event is saved here
    pub date: DateKey,
    pub title: String,
    pub description: String,
    /// Field-level error shown under the title input
    pub title_error: Option<String>,
    /// Focus the title field on the first frame
    pub request_focus: bool,
}

impl EventDialogState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: DateKey::from_date(date),
            title: String::new(),
            description: String::new(),
            title_error: None,
            request_focus: true,
        }
    }

    /// Surface a validation failure on the title field
    pub fn show_error(&mut self, error: &EventError, strings: &Strings) {
        self.title_error = Some(match error {
            EventError::EmptyTitle => strings.empty_title_error.to_string(),
        });
    }

    /// Editing the title clears a stale error
    pub fn clear_error(&mut self) {
        self.title_error = None;
    }
}
