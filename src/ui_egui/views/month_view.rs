//! Month calendar grid.
//!
//! Header with month/year navigation, a localized weekday row and a six-week
//! grid of selectable days. Days holding events carry a dot in the marker
//! color.

use chrono::{Datelike, Duration, NaiveDate};
use egui::RichText;

use crate::models::date_key::DateKey;
use crate::models::locale::Strings;
use crate::services::event::EventStore;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{month_grid_start, shift_month};

/// Which month is on screen; may differ from the selected date's month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthViewState {
    pub viewing: NaiveDate,
}

impl MonthViewState {
    pub fn new(viewing: NaiveDate) -> Self {
        Self { viewing }
    }

    pub fn shift(&mut self, months: i32) {
        self.viewing = shift_month(self.viewing, months);
    }
}

/// Inputs needed to draw one frame of the grid
pub struct MonthViewContext<'a> {
    pub selected: NaiveDate,
    pub today: NaiveDate,
    pub first_day_of_week: u8,
    pub store: &'a EventStore,
    pub strings: &'a Strings,
    pub theme: &'a CalendarTheme,
}

/// Weekday header labels starting at `first_day_of_week`
pub fn weekday_headers(strings: &Strings, first_day_of_week: u8) -> [&'static str; 7] {
    let mut headers = [""; 7];
    for (i, header) in headers.iter_mut().enumerate() {
        *header = strings.weekday_short[(i + first_day_of_week as usize) % 7];
    }
    headers
}

/// Draw the month grid. Returns the day the user clicked, if any.
pub fn render_month_view(
    ui: &mut egui::Ui,
    state: &mut MonthViewState,
    view: &MonthViewContext<'_>,
) -> Option<NaiveDate> {
    let mut clicked = None;

    render_header(ui, state, view, &mut clicked);
    ui.separator();

    let viewing = state.viewing;
    egui::Grid::new("month_view_grid")
        .num_columns(7)
        .spacing([6.0, 4.0])
        .min_col_width(32.0)
        .show(ui, |ui| {
            for name in weekday_headers(view.strings, view.first_day_of_week) {
                ui.label(RichText::new(name).small().strong());
            }
            ui.end_row();

            let mut current = month_grid_start(viewing, view.first_day_of_week);
            for _week in 0..6 {
                for _day in 0..7 {
                    if ui
                        .selectable_label(current == view.selected, day_text(current, viewing, view))
                        .clicked()
                    {
                        clicked = Some(current);
                    }
                    current += Duration::days(1);
                }
                ui.end_row();
            }
        });

    clicked
}

fn render_header(
    ui: &mut egui::Ui,
    state: &mut MonthViewState,
    view: &MonthViewContext<'_>,
    clicked: &mut Option<NaiveDate>,
) {
    ui.horizontal(|ui| {
        if ui.small_button("◀◀").clicked() {
            state.shift(-12);
        }
        if ui.small_button("◀").clicked() {
            state.shift(-1);
        }

        let header = format!(
            "{} {}",
            view.strings.month_name(state.viewing.month()),
            state.viewing.year()
        );
        ui.label(RichText::new(header).strong());

        if ui.small_button("▶").clicked() {
            state.shift(1);
        }
        if ui.small_button("▶▶").clicked() {
            state.shift(12);
        }

        if ui.button(view.strings.today).clicked() {
            state.viewing = view.today;
            *clicked = Some(view.today);
        }
    });
}

const EVENT_DOT: char = '•';

/// Grid label for a day number, with a dot when the day holds events
pub fn day_label(day: u32, has_events: bool) -> String {
    if has_events {
        format!("{}{}", day, EVENT_DOT)
    } else {
        day.to_string()
    }
}

fn day_text(date: NaiveDate, viewing: NaiveDate, view: &MonthViewContext<'_>) -> RichText {
    let has_events = view.store.contains(&DateKey::from_date(date));
    let mut text = RichText::new(day_label(date.day(), has_events));

    if date.month() != viewing.month() {
        text = text.weak();
    }
    if date == view.today {
        text = text.strong().color(view.theme.today_text);
    }
    if has_events {
        text = text.color(view.theme.event_marker);
    }
    text
}
