mod render;
mod state;

pub use render::{render_event_dialog, EventDialogAction};
pub use state::EventDialogState;
