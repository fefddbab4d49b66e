//! JSON schema preview panel

use crate::app::App;
use crate::schema::field_count;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the live preview of the converted document
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let count = field_count(&app.state.document);
    let badge = format!(
        " JSON Schema Preview [{} field{}] ",
        count,
        if count == 1 { "" } else { "s" }
    );

    let text = serde_json::to_string_pretty(&app.state.document)
        .unwrap_or_else(|_| "{}".to_string());

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .scroll((app.state.preview_scroll, 0))
        .block(
            Block::default()
                .title(badge)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}
