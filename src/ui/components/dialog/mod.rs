//! Dialog components

mod base;
mod error_dialog;
mod import_dialog;

pub use error_dialog::render_error_dialog;
pub use import_dialog::render_import_dialog;
