//! Layout and status bar

use crate::app::App;
use crate::state::{Mode, Severity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the builder panel and the preview panel,
/// reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Schema fields
            Constraint::Percentage(50), // JSON preview
        ])
        .split(rows[0]);

    (panels[0], panels[1])
}

/// Draw the bottom status bar: key hints for the current mode, plus
/// any pending info notification
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    let hints = match app.state.mode {
        Mode::Browse => {
            if app.state.tree.is_empty() {
                " a:add field  i:import  c:clear  q:quit "
            } else {
                " a:add  n:add nested  Enter:edit key  t:type  d:delete  e:export  i:import  c:clear  q:quit "
            }
        }
        Mode::EditKey => " type to edit key  Backspace:delete  Enter/Esc:done ",
        Mode::ImportDialog => " type a file path  Enter:import  Esc:cancel ",
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if let Some(notification) = &app.state.notification {
        if notification.severity == Severity::Info {
            spans.push(Span::styled(
                format!(" {} ", notification.title),
                Style::default().fg(Color::Green),
            ));
            spans.push(Span::styled(
                notification.description.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
