//! UI module for rendering the TUI

mod builder;
mod components;
mod layout;
mod preview;

use crate::app::App;
use crate::state::{Mode, Severity};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (builder_area, preview_area) = layout::create_layout(area);

    builder::draw(frame, builder_area, app);
    preview::draw(frame, preview_area, app);
    layout::draw_status_bar(frame, app);

    // Overlays
    if matches!(app.state.mode, Mode::ImportDialog) {
        components::render_import_dialog(frame, &app.state.import_path);
    }
    if let Some(notification) = &app.state.notification {
        if notification.severity == Severity::Error {
            components::render_error_dialog(frame, &notification.title, &notification.description);
        }
    }
}
