//! Application state and core logic

use crate::config::BuilderConfig;
use crate::schema::{
    convert, export_document, import_document, reconstruct, FieldPath, ImportError,
    EXPORT_FILE_NAME,
};
use crate::state::{AppState, Mode, Notification, Severity};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::{Path, PathBuf};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: BuilderConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Path exports are written to
    pub fn export_path(&self) -> PathBuf {
        self.config
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(EXPORT_FILE_NAME)
    }

    /// Handle a key event. Dispatches on the current input mode; an
    /// error notification swallows keys until dismissed.
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self
            .state
            .notification
            .as_ref()
            .is_some_and(|n| n.severity == Severity::Error)
        {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.notification = None;
            }
            return Ok(());
        }

        match self.state.mode {
            Mode::Browse => self.handle_browse_key(key).await,
            Mode::EditKey => self.handle_edit_key(key),
            Mode::ImportDialog => self.handle_import_dialog_key(key).await,
        }
        Ok(())
    }

    async fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up => {
                self.state.selected = self.state.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let rows = self.state.tree.flatten().len();
                if self.state.selected + 1 < rows {
                    self.state.selected += 1;
                }
            }
            KeyCode::PageUp => {
                self.state.preview_scroll = self.state.preview_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                self.state.preview_scroll = self.state.preview_scroll.saturating_add(5);
            }
            KeyCode::Char('a') => self.add_field(),
            KeyCode::Char('n') => self.add_nested_field(),
            KeyCode::Char('t') => self.cycle_selected_type(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Enter => {
                if self.selected_path().is_some() {
                    self.state.mode = Mode::EditKey;
                }
            }
            KeyCode::Char('e') => self.export().await,
            KeyCode::Char('i') => self.open_import_dialog(),
            KeyCode::Char('c') => self.clear_all(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.state.mode = Mode::Browse,
            KeyCode::Backspace => {
                if let Some(path) = self.selected_path() {
                    if let Some(field) = self.state.tree.get_mut(&path) {
                        field.key.pop();
                    }
                    self.recompute_document();
                }
            }
            KeyCode::Char(c) => {
                if let Some(path) = self.selected_path() {
                    if let Some(field) = self.state.tree.get_mut(&path) {
                        field.key.push(c);
                    }
                    self.recompute_document();
                }
            }
            _ => {}
        }
    }

    async fn handle_import_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.mode = Mode::Browse,
            KeyCode::Enter => {
                let path = self.state.import_path.clone();
                self.state.mode = Mode::Browse;
                self.import(Path::new(&path)).await;
            }
            KeyCode::Backspace => {
                self.state.import_path.pop();
            }
            KeyCode::Char(c) => self.state.import_path.push(c),
            _ => {}
        }
    }

    /// Path of the currently selected row, if any
    fn selected_path(&self) -> Option<FieldPath> {
        self.state
            .tree
            .flatten()
            .get(self.state.selected)
            .map(|row| row.path.clone())
    }

    /// Recompute the document from the tree. Called at the end of
    /// every mutating operation.
    fn recompute_document(&mut self) {
        self.state.document = convert(&self.state.tree.fields);
    }

    /// Append a blank field at the top level and select it
    pub fn add_field(&mut self) {
        self.state.tree.add_field(&FieldPath::root());
        let new_path = FieldPath(vec![self.state.tree.fields.len() - 1]);
        let rows = self.state.tree.flatten();
        if let Some(index) = rows.iter().position(|row| row.path == new_path) {
            self.state.selected = index;
        }
        self.recompute_document();
    }

    /// Append a blank child under the selected field. Allowed on any
    /// field; the child only surfaces once the type is `Nested`.
    pub fn add_nested_field(&mut self) {
        if let Some(path) = self.selected_path() {
            self.state.tree.add_field(&path);
            self.recompute_document();
        }
    }

    /// Remove the selected field, discarding its children
    pub fn remove_selected(&mut self) {
        if let Some(path) = self.selected_path() {
            self.state.tree.remove_field(&path);
            self.state.clamp_selection();
            self.recompute_document();
        }
    }

    /// Cycle the selected field's type
    pub fn cycle_selected_type(&mut self) {
        if let Some(path) = self.selected_path() {
            if let Some(field) = self.state.tree.get_mut(&path) {
                field.ty = field.ty.next();
            }
            self.state.clamp_selection();
            self.recompute_document();
        }
    }

    /// Export the document to the configured location. No-op while the
    /// tree is empty.
    pub async fn export(&mut self) {
        if self.state.tree.is_empty() {
            return;
        }
        let path = self.export_path();
        match export_document(&self.state.document, &path).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), "schema exported");
                self.state.notify(Notification::info(
                    "Schema exported",
                    format!("Your JSON schema has been written to {}.", path.display()),
                ));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "export failed");
                self.state.notify(Notification::error(
                    "Export failed",
                    format!("Could not write {}.", path.display()),
                ));
            }
        }
    }

    /// Open the import dialog, prefilled with the last imported path
    pub fn open_import_dialog(&mut self) {
        self.state.import_path = self.config.last_import_path.clone().unwrap_or_default();
        self.state.mode = Mode::ImportDialog;
    }

    /// Import a document from `path`, replacing the whole tree in a
    /// single install. On failure the existing tree is left untouched.
    pub async fn import(&mut self, path: &Path) {
        match import_document(path).await {
            Ok(document) => {
                self.state.tree.fields = reconstruct(&document);
                self.state.selected = 0;
                self.state.preview_scroll = 0;
                self.recompute_document();
                self.config.last_import_path = Some(path.display().to_string());
                tracing::info!(path = %path.display(), "schema imported");
                self.state.notify(Notification::info(
                    "Schema imported",
                    "Your JSON schema has been loaded successfully.",
                ));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "import failed");
                let description = match err {
                    ImportError::Read(_) => "Could not read the file.",
                    ImportError::Parse(_) => "Invalid JSON file. Please check the format.",
                };
                self.state
                    .notify(Notification::error("Import failed", description));
            }
        }
    }

    /// Reset the tree to empty. Always succeeds.
    pub fn clear_all(&mut self) {
        self.state.tree.clear();
        self.state.selected = 0;
        self.state.preview_scroll = 0;
        self.recompute_document();
        tracing::info!("schema cleared");
        self.state.notify(Notification::info(
            "Schema cleared",
            "All fields have been removed.",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn app() -> App {
        App::new(BuilderConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("schema-builder-app-{}-{}", std::process::id(), name))
    }

    /// Build the two-field scenario tree: name (string), age (number)
    fn scenario_app() -> App {
        let mut app = app();
        app.add_field();
        app.state.tree.fields[0].key = "name".to_string();
        app.add_field();
        app.state.tree.fields[1].key = "age".to_string();
        app.state.tree.fields[1].ty = FieldType::Number;
        app.state.document = convert(&app.state.tree.fields);
        app
    }

    #[test]
    fn test_add_field_selects_new_row_and_recomputes() {
        let mut app = app();
        app.add_field();
        assert_eq!(app.state.tree.fields.len(), 1);
        assert_eq!(app.state.selected, 0);
        assert_eq!(app.state.document, json!({ "type": "object", "properties": {} }));
    }

    #[test]
    fn test_scenario_document() {
        let app = scenario_app();
        assert_eq!(
            app.state.document,
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "age": { "type": "number" }
                }
            })
        );
    }

    #[test]
    fn test_cycle_type_updates_document() {
        let mut app = app();
        app.add_field();
        app.state.tree.fields[0].key = "age".to_string();
        app.cycle_selected_type();
        assert_eq!(app.state.tree.fields[0].ty, FieldType::Number);
        assert_eq!(
            app.state.document,
            json!({
                "type": "object",
                "properties": { "age": { "type": "number" } }
            })
        );
    }

    #[test]
    fn test_nested_scenario_document() {
        let mut app = app();
        app.add_field();
        app.state.tree.fields[0].key = "address".to_string();
        app.cycle_selected_type();
        app.cycle_selected_type();
        assert_eq!(app.state.tree.fields[0].ty, FieldType::Nested);
        app.add_nested_field();
        app.state.tree.fields[0].nested[0].key = "city".to_string();
        app.state.document = convert(&app.state.tree.fields);
        assert_eq!(
            app.state.document,
            json!({
                "type": "object",
                "properties": {
                    "address": {
                        "type": "object",
                        "properties": { "city": { "type": "string" } }
                    }
                }
            })
        );
    }

    #[test]
    fn test_remove_selected_clamps_selection() {
        let mut app = scenario_app();
        app.state.selected = 1;
        app.remove_selected();
        assert_eq!(app.state.tree.fields.len(), 1);
        assert_eq!(app.state.selected, 0);
        assert_eq!(
            app.state.document,
            json!({
                "type": "object",
                "properties": { "name": { "type": "string" } }
            })
        );
    }

    #[test]
    fn test_clear_all_resets_and_notifies() {
        let mut app = scenario_app();
        app.clear_all();
        assert!(app.state.tree.is_empty());
        assert_eq!(app.state.document, json!({ "type": "object", "properties": {} }));
        let notification = app.state.notification.unwrap();
        assert_eq!(notification.title, "Schema cleared");
        assert_eq!(notification.severity, Severity::Info);
    }

    #[tokio::test]
    async fn test_export_is_noop_on_empty_tree() {
        let mut app = app();
        app.export().await;
        assert!(app.state.notification.is_none());
    }

    #[tokio::test]
    async fn test_export_writes_pretty_document() {
        let dir = scratch_path("export-dir");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let mut app = scenario_app();
        app.config.export_dir = Some(dir.clone());
        app.export().await;
        let text = tokio::fs::read_to_string(dir.join(EXPORT_FILE_NAME))
            .await
            .unwrap();
        let written: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(written, app.state.document);
        assert_eq!(app.state.notification.unwrap().title, "Schema exported");
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_export_write_failure_raises_error_notification() {
        let mut app = scenario_app();
        app.config.export_dir = Some(scratch_path("missing-dir").join("nested"));
        app.export().await;
        let notification = app.state.notification.unwrap();
        assert_eq!(notification.title, "Export failed");
        assert_eq!(notification.severity, Severity::Error);
        // The tree and document are untouched by a failed export
        assert_eq!(app.state.tree.fields.len(), 2);
    }

    #[tokio::test]
    async fn test_import_replaces_tree() {
        let path = scratch_path("import.json");
        let document = json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "meta": { "type": "object", "properties": { "x": { "type": "string" } } }
            }
        });
        tokio::fs::write(&path, document.to_string()).await.unwrap();

        let mut app = app();
        app.import(&path).await;

        assert_eq!(app.state.tree.fields.len(), 2);
        assert_eq!(app.state.tree.fields[0].key, "name");
        assert_eq!(app.state.tree.fields[1].ty, FieldType::Nested);
        // Lossy on purpose: nested properties are not reconstructed
        assert!(app.state.tree.fields[1].nested.is_empty());
        assert_eq!(app.state.notification.unwrap().title, "Schema imported");
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_import_malformed_preserves_tree() {
        let path = scratch_path("malformed.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let mut app = scenario_app();
        let before_tree = app.state.tree.fields.clone();
        let before_document = app.state.document.clone();
        app.import(&path).await;

        assert_eq!(app.state.tree.fields, before_tree);
        assert_eq!(app.state.document, before_document);
        let notification = app.state.notification.unwrap();
        assert_eq!(notification.title, "Import failed");
        assert_eq!(notification.severity, Severity::Error);
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_import_missing_file_preserves_tree() {
        let mut app = scenario_app();
        let before_tree = app.state.tree.fields.clone();
        app.import(&scratch_path("nope.json")).await;
        assert_eq!(app.state.tree.fields, before_tree);
        assert_eq!(app.state.notification.unwrap().severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_edit_key_via_key_events() {
        let mut app = app();
        app.add_field();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.state.mode, Mode::EditKey);
        for c in "city".chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.state.mode, Mode::Browse);
        assert_eq!(app.state.tree.fields[0].key, "cit");
        assert_eq!(
            app.state.document,
            json!({
                "type": "object",
                "properties": { "cit": { "type": "string" } }
            })
        );
    }

    #[tokio::test]
    async fn test_error_notification_swallows_keys_until_dismissed() {
        let mut app = app();
        app.state
            .notify(Notification::error("Import failed", "Invalid JSON file."));
        app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
        assert!(app.state.tree.is_empty());
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(app.state.notification.is_none());
        app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
        assert_eq!(app.state.tree.fields.len(), 1);
    }

    #[tokio::test]
    async fn test_quit_key() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }
}
