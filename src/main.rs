// Calendar Now Application
// Main entry point

use calendar_now::models::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use calendar_now::services::event::EventStore;
use calendar_now::services::session::CalendarSession;
use calendar_now::services::settings::SettingsService;
use calendar_now::ui_egui::CalendarApp;
use chrono::Local;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Now");

    let settings_service = SettingsService::from_project_dirs().unwrap_or_else(|err| {
        log::warn!("{:#}; keeping settings next to the executable", err);
        SettingsService::new("settings.toml")
    });
    let settings = settings_service.get_or_default();

    // Events live only as long as this session
    let session = CalendarSession::new(EventStore::new(), Local::now().date_naive());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.locale.strings().app_title)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "calendar-now",
        options,
        Box::new(move |cc| {
            Ok(Box::new(CalendarApp::new(
                cc,
                settings,
                settings_service,
                session,
            )))
        }),
    )
}
