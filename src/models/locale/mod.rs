// Locale module
// User-facing texts for the supported interface languages

use serde::{Deserialize, Serialize};

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "en")]
    English,
}

/// Every string the UI shows, for one locale
#[derive(Debug)]
pub struct Strings {
    pub app_title: &'static str,
    pub no_events: &'static str,
    pub add_event: &'static str,
    pub add_event_dialog_title: &'static str,
    pub title_label: &'static str,
    pub description_label: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub empty_title_error: &'static str,
    pub today: &'static str,
    /// January first
    pub month_names: [&'static str; 12],
    /// Sunday first
    pub weekday_short: [&'static str; 7],
    saved_prefix: &'static str,
    saved_suffix: &'static str,
}

impl Strings {
    /// Confirmation shown after an event has been stored
    pub fn event_saved(&self, title: &str) -> String {
        format!("{}\"{}\"{}", self.saved_prefix, title, self.saved_suffix)
    }

    /// Month name for a one-based month number
    pub fn month_name(&self, month: u32) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        self.month_names[index]
    }
}

static RUSSIAN: Strings = Strings {
    app_title: "Календарь",
    no_events: "Мероприятия отсутствуют",
    add_event: "➕ Добавить",
    add_event_dialog_title: "Добавить мероприятие",
    title_label: "Название",
    description_label: "Описание",
    save: "Сохранить",
    cancel: "Отмена",
    empty_title_error: "Введите название",
    today: "Сегодня",
    month_names: [
        "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
        "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
    ],
    weekday_short: ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
    saved_prefix: "Мероприятие ",
    saved_suffix: " сохранено",
};

static ENGLISH: Strings = Strings {
    app_title: "Calendar",
    no_events: "No events",
    add_event: "➕ Add",
    add_event_dialog_title: "Add event",
    title_label: "Title",
    description_label: "Description",
    save: "Save",
    cancel: "Cancel",
    empty_title_error: "Enter a title",
    today: "Today",
    month_names: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    weekday_short: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    saved_prefix: "Event ",
    saved_suffix: " saved",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Russian => &RUSSIAN,
            Locale::English => &ENGLISH,
        }
    }
}
