mod lifecycle;
mod state;
mod toast;

use self::state::AppState;
use self::toast::ToastManager;
use crate::models::locale::Strings;
use crate::models::settings::Settings;
use crate::services::session::CalendarSession;
use crate::services::settings::SettingsService;
use crate::ui_egui::event_dialog::{render_event_dialog, EventDialogAction};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::day_panel::render_day_panel;
use crate::ui_egui::views::month_view::{render_month_view, MonthViewContext};
use chrono::{Datelike, Local, NaiveDate};

pub struct CalendarApp {
    /// UI preferences, written back on exit
    settings: Settings,
    settings_service: SettingsService,
    /// Selected day and the event store behind it
    session: CalendarSession,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Pending theme change from the header toggle
    pending_theme_apply: bool,
    /// Month on screen and the open dialog, if any
    state: AppState,
    toast_manager: ToastManager,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl CalendarApp {
    fn strings(&self) -> &'static Strings {
        self.settings.locale.strings()
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        let strings = self.strings();
        let today = Local::now().date_naive();

        let calendar_enabled = self.state.event_dialog.is_none();

        let (clicked_date, add_clicked, toggle_theme) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                // The open dialog is modal over the calendar
                ui.add_enabled_ui(calendar_enabled, |ui| {
                    let toggle_theme = ui
                        .horizontal(|ui| {
                            ui.heading(strings.app_title);
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                let icon = if self.active_theme.is_dark { "☀" } else { "🌙" };
                                ui.button(icon).clicked()
                            })
                            .inner
                        })
                        .inner;
                    ui.separator();

                    let view = MonthViewContext {
                        selected: self.session.selected_date(),
                        today,
                        first_day_of_week: self.settings.first_day_of_week,
                        store: self.session.store(),
                        strings,
                        theme: &self.active_theme,
                    };
                    let clicked_date = render_month_view(ui, &mut self.state.month_view, &view);

                    ui.add_space(8.0);
                    ui.separator();

                    let add_clicked =
                        render_day_panel(ui, &self.session, strings, &self.active_theme);
                    (clicked_date, add_clicked, toggle_theme)
                })
                .inner
            })
            .inner;

        if let Some(date) = clicked_date {
            self.select_date(date);
        }
        if add_clicked {
            self.state.open_event_dialog(self.session.selected_date());
        }
        if toggle_theme {
            self.toggle_theme();
        }
    }

    fn render_event_dialog(&mut self, ctx: &egui::Context) {
        let strings = self.strings();
        let Some(dialog) = self.state.event_dialog.as_mut() else {
            return;
        };

        match render_event_dialog(ctx, dialog, strings, &self.active_theme) {
            EventDialogAction::None => {}
            EventDialogAction::Cancel => self.state.event_dialog = None,
            EventDialogAction::Submit { title, description } => {
                self.submit_event(&title, &description);
            }
        }
    }

    fn select_date(&mut self, date: NaiveDate) {
        self.session.select_date(date);
        let viewing = self.state.month_view.viewing;
        if (viewing.year(), viewing.month()) != (date.year(), date.month()) {
            self.state.month_view.viewing = date;
        }
    }

    fn submit_event(&mut self, title: &str, description: &str) {
        let strings = self.strings();
        self.state.submit_event(
            &mut self.session,
            &mut self.toast_manager,
            strings,
            title,
            description,
        );
    }

    fn toggle_theme(&mut self) {
        self.settings.theme = if self.active_theme.is_dark {
            "light".to_string()
        } else {
            "dark".to_string()
        };
        self.settings.use_system_theme = false;
        self.pending_theme_apply = true;

        if let Err(err) = self.settings_service.update(&self.settings) {
            log::error!("Failed to save theme preference: {:#}", err);
            self.toast_manager.error(err.to_string());
        }
    }
}
