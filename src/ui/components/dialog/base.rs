//! Base dialog rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A centered dialog overlay: bold title, body lines, optional hint row
pub struct Dialog<'a> {
    pub title: &'a str,
    pub accent: Color,
    pub body: Vec<Line<'a>>,
    pub hint: Option<Line<'a>>,
    pub width: u16,
}

impl Dialog<'_> {
    pub fn render(self, frame: &mut Frame) {
        let area = frame.area();

        let mut content = vec![
            Line::from(Span::styled(
                self.title,
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        content.extend(self.body);
        if let Some(hint) = self.hint {
            content.push(Line::from(""));
            content.push(hint);
        }

        // +2 rows for borders
        let height = (content.len() as u16 + 2).max(5);
        let width = self.width.min(area.width);
        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, dialog_area);

        let dialog = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.accent))
                    .style(Style::default().bg(Color::Black)),
            )
            .style(Style::default().bg(Color::Black));

        frame.render_widget(dialog, dialog_area);
    }
}

/// Hint row with highlighted key names, e.g. "Enter to import"
pub fn hint_line<'a>(parts: &[(&'a str, bool)]) -> Line<'a> {
    let spans = parts
        .iter()
        .map(|(text, is_key)| {
            if *is_key {
                Span::styled(
                    *text,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(*text)
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}
