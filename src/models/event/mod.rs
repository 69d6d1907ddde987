// Event module
// A short title/description note filed under one calendar day

use thiserror::Error;

/// Reasons an event cannot be created
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
}

/// User-entered event for a single day. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    title: String,
    description: String,
}

impl Event {
    /// Create a new event from raw form input
    ///
    /// Both fields are trimmed. The title must be non-empty after trimming;
    /// the description may be empty.
    ///
    /// # Examples
    /// ```
    /// use calendar_now::models::event::Event;
    ///
    /// let event = Event::new("  Meeting ", "Standup").unwrap();
    /// assert_eq!(event.title(), "Meeting");
    /// assert!(Event::new("   ", "").is_err());
    /// ```
    pub fn new(
        title: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Result<Self, EventError> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(EventError::EmptyTitle);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.as_ref().trim().to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
