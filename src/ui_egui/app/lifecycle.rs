use super::state::AppState;
use super::toast::ToastManager;
use super::CalendarApp;
use crate::models::settings::{Settings, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::services::session::CalendarSession;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;

impl CalendarApp {
    /// Build the app around an already constructed session.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: SettingsService,
        session: CalendarSession,
    ) -> Self {
        log::info!(
            "Opening calendar on {} (locale {:?}, theme {})",
            session.selected_key(),
            settings.locale,
            settings.theme
        );

        let state = AppState::new(session.selected_date());
        let mut app = Self {
            settings,
            settings_service,
            session,
            active_theme: CalendarTheme::light(),
            pending_theme_apply: false,
            state,
            toast_manager: ToastManager::new(),
        };

        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = CalendarTheme::resolve(&self.settings);
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.pending_theme_apply {
            self.apply_theme(ctx);
            self.pending_theme_apply = false;
        }

        self.remember_window_size(ctx);

        self.render_central_panel(ctx);
        self.render_event_dialog(ctx);

        let is_dark = self.active_theme.is_dark;
        self.toast_manager.render(ctx, is_dark);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!(
            "Closing calendar with {} event(s) on {} day(s); events are not kept",
            self.session.store().event_count(),
            self.session.store().len()
        );

        if let Err(err) = self.settings_service.update(&self.settings) {
            log::error!("Failed to save settings on exit: {:#}", err);
        }
    }

    fn remember_window_size(&mut self, ctx: &egui::Context) {
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.window_width = rect.width().max(MIN_WINDOW_WIDTH);
            self.settings.window_height = rect.height().max(MIN_WINDOW_HEIGHT);
        }
    }
}
