//! Import path input dialog

use super::base::{hint_line, Dialog};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

/// Render the import dialog with the current path input
pub fn render_import_dialog(frame: &mut Frame, path_input: &str) {
    let input = Line::from(vec![
        Span::styled("Path: ", Style::default().fg(Color::DarkGray)),
        if path_input.is_empty() {
            Span::styled("type a file path...", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(path_input.to_string(), Style::default().fg(Color::Yellow))
        },
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]);

    Dialog {
        title: "Import Schema",
        accent: Color::Cyan,
        body: vec![
            Line::from("Load a schema.json document, replacing the current fields."),
            Line::from(""),
            input,
        ],
        hint: Some(hint_line(&[
            ("Enter", true),
            (" to import, ", false),
            ("Esc", true),
            (" to cancel", false),
        ])),
        width: 64,
    }
    .render(frame);
}
