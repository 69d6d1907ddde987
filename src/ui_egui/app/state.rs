use super::toast::ToastManager;
use crate::models::locale::Strings;
use crate::services::session::CalendarSession;
use crate::ui_egui::event_dialog::EventDialogState;
use crate::ui_egui::views::month_view::MonthViewState;
use chrono::NaiveDate;

pub struct AppState {
    pub month_view: MonthViewState,
    /// Open add-event dialog (None = closed)
    pub event_dialog: Option<EventDialogState>,
}

impl AppState {
    pub fn new(initial_month: NaiveDate) -> Self {
        Self {
            month_view: MonthViewState::new(initial_month),
            event_dialog: None,
        }
    }

    /// Open the add-event dialog for `date`. An open dialog keeps its input.
    pub fn open_event_dialog(&mut self, date: NaiveDate) {
        if self.event_dialog.is_none() {
            self.event_dialog = Some(EventDialogState::new(date));
        }
    }

    /// Save the form under the date the dialog was opened for.
    ///
    /// Success closes the dialog and raises a toast; a rejected title keeps
    /// the dialog open with the field error set.
    pub fn submit_event(
        &mut self,
        session: &mut CalendarSession,
        toasts: &mut ToastManager,
        strings: &Strings,
        title: &str,
        description: &str,
    ) {
        let Some(dialog) = self.event_dialog.as_mut() else {
            return;
        };

        match session.add_event_on(&dialog.date, title, description) {
            Ok(event) => {
                self.event_dialog = None;
                toasts.success(strings.event_saved(event.title()));
            }
            Err(err) => {
                log::debug!("Rejected event form: {}", err);
                dialog.show_error(&err, strings);
            }
        }
    }
}
