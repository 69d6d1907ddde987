//! Selected-day panel: the day summary text and the add button.

use egui::RichText;

use crate::models::locale::Strings;
use crate::services::session::CalendarSession;
use crate::ui_egui::theme::CalendarTheme;

/// Draw the summary for the session's selected day.
/// Returns true when the add button was clicked.
pub fn render_day_panel(
    ui: &mut egui::Ui,
    session: &CalendarSession,
    strings: &Strings,
    theme: &CalendarTheme,
) -> bool {
    let add_clicked = ui
        .horizontal(|ui| {
            ui.heading(session.selected_key().as_str());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.button(strings.add_event).clicked()
            })
            .inner
        })
        .inner;

    ui.add_space(4.0);

    egui::Frame::none()
        .fill(theme.panel_background)
        .rounding(6.0)
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    ui.label(RichText::new(session.day_summary(strings)).monospace());
                });
        });

    add_clicked
}
