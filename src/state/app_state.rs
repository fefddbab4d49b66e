//! Application state definitions

use crate::schema::{convert, FieldTree};
use serde_json::Value;
use std::time::{Duration, Instant};

/// How long an info notification stays in the status bar
const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Input mode of the editor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating field rows
    #[default]
    Browse,
    /// Typing into the selected field's key
    EditKey,
    /// Entering a file path in the import dialog
    ImportDialog,
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A user-visible notification. Info renders in the status bar and
/// expires; Error renders as a dialog until dismissed.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    shown_at: Instant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
            shown_at: Instant::now(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
            shown_at: Instant::now(),
        }
    }

    /// Whether an info notification has outlived its status-bar slot.
    /// Errors never expire; they are dismissed explicitly.
    pub fn is_expired(&self) -> bool {
        self.severity == Severity::Info && self.shown_at.elapsed() >= NOTIFICATION_TTL
    }
}

/// Mutable state behind the editor session
#[derive(Debug)]
pub struct AppState {
    /// The field tree being edited
    pub tree: FieldTree,
    /// Converted document; recomputed after every committed mutation
    pub document: Value,
    /// Index of the selected row in the flattened tree view
    pub selected: usize,
    pub mode: Mode,
    /// Input buffer for the import dialog
    pub import_path: String,
    /// Vertical scroll offset of the JSON preview
    pub preview_scroll: u16,
    pub notification: Option<Notification>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tree: FieldTree::default(),
            document: convert(&[]),
            selected: 0,
            mode: Mode::default(),
            import_path: String::new(),
            preview_scroll: 0,
            notification: None,
        }
    }
}

impl AppState {
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop an expired info notification
    pub fn tick_notification(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }

    /// Clamp the selection to the current row count
    pub fn clamp_selection(&mut self) {
        let rows = self.tree.flatten().len();
        if rows == 0 {
            self.selected = 0;
        } else if self.selected >= rows {
            self.selected = rows - 1;
        }
    }
}
