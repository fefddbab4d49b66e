//! Error dialog component

use super::base::{hint_line, Dialog};
use ratatui::{style::Color, text::Line, Frame};

/// Render an error notification as a centered dialog overlay
pub fn render_error_dialog(frame: &mut Frame, title: &str, description: &str) {
    Dialog {
        title,
        accent: Color::Red,
        body: vec![Line::from(description.to_string())],
        hint: Some(hint_line(&[
            ("Press ", false),
            ("Enter", true),
            (" or ", false),
            ("Esc", true),
            (" to dismiss", false),
        ])),
        width: 60,
    }
    .render(frame);
}
