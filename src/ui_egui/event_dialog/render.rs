use egui::RichText;

use crate::models::locale::Strings;
use crate::ui_egui::theme::CalendarTheme;

use super::state::EventDialogState;

/// What the user did with the dialog this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDialogAction {
    None,
    Submit { title: String, description: String },
    Cancel,
}

const FIELD_WIDTH: f32 = 260.0;

pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventDialogState,
    strings: &Strings,
    theme: &CalendarTheme,
) -> EventDialogAction {
    let mut action = EventDialogAction::None;
    let mut dialog_open = true;

    egui::Window::new(strings.add_event_dialog_title)
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(state.date.as_str()).strong());
            ui.add_space(4.0);
            render_title_field(ui, state, strings, theme);
            ui.add_space(8.0);

            ui.label(strings.description_label);
            ui.add(
                egui::TextEdit::multiline(&mut state.description)
                    .desired_width(FIELD_WIDTH)
                    .desired_rows(4),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button(strings.save).clicked() {
                    action = EventDialogAction::Submit {
                        title: state.title.clone(),
                        description: state.description.clone(),
                    };
                }
                if ui.button(strings.cancel).clicked() {
                    action = EventDialogAction::Cancel;
                }
            });
        });

    if !dialog_open {
        action = EventDialogAction::Cancel;
    }

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = EventDialogAction::Cancel;
    }

    action
}

fn render_title_field(
    ui: &mut egui::Ui,
    state: &mut EventDialogState,
    strings: &Strings,
    theme: &CalendarTheme,
) {
    ui.label(strings.title_label);
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.title)
            .desired_width(FIELD_WIDTH)
            .hint_text(strings.title_label),
    );

    if state.request_focus {
        response.request_focus();
        state.request_focus = false;
    }
    if response.changed() {
        state.clear_error();
    }

    if let Some(ref error) = state.title_error {
        ui.label(RichText::new(error).color(theme.error_text).small());
    }
}
