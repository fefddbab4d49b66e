//! Schema fields panel: the editable field rows

use crate::app::App;
use crate::schema::FieldType;
use crate::state::Mode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Indentation per nesting level
const INDENT: &str = "  ";

/// Draw the schema fields panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let field_total = app.state.tree.fields.len();
    let badge = format!(
        " Schema Fields [{} field{}] ",
        field_total,
        if field_total == 1 { "" } else { "s" }
    );
    let block = Block::default().title(badge).borders(Borders::ALL);

    let rows = app.state.tree.flatten();
    if rows.is_empty() {
        let empty_state = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No fields yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Start building your schema by adding your first field",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press 'a' to add a field",
                Style::default().fg(Color::Cyan),
            )),
        ])
        .centered()
        .block(block);
        frame.render_widget(empty_state, area);
        return;
    }

    let editing = matches!(app.state.mode, Mode::EditKey);
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let field = app.state.tree.get(&row.path)?;
            let is_selected = index == app.state.selected;

            let key_style = if is_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::raw(INDENT.repeat(row.depth))];
            if field.key.is_empty() && !(is_selected && editing) {
                spans.push(Span::styled(
                    "(unnamed)",
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::styled(field.key.clone(), key_style));
            }
            if is_selected && editing {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("[{}]", field.ty.label()),
                type_style(&field.ty),
            ));

            let item = ListItem::new(Line::from(spans));
            Some(if is_selected {
                item.style(Style::default().bg(Color::Rgb(30, 30, 46)))
            } else {
                item
            })
        })
        .collect();

    // Stateful render keeps the selected row visible when scrolling
    let list = List::new(items).block(block);
    let mut list_state = ListState::default().with_selected(Some(app.state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn type_style(ty: &FieldType) -> Style {
    match ty {
        FieldType::String => Style::default().fg(Color::Green),
        FieldType::Number => Style::default().fg(Color::Yellow),
        FieldType::Nested => Style::default().fg(Color::Magenta),
        FieldType::Other(_) => Style::default().fg(Color::DarkGray),
    }
}
