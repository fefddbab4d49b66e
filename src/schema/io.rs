//! Document export and import

use super::field::{Field, FieldType};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Fixed export file name
pub const EXPORT_FILE_NAME: &str = "schema.json";

/// Failures on the import path. Both abort the import and leave the
/// existing tree untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Write the document to `path` as pretty-printed JSON (2-space indent)
pub async fn export_document(document: &Value, path: &Path) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(document)?;
    tokio::fs::write(path, text).await?;
    Ok(())
}

/// Read and parse a document from `path`. Shape is not validated here;
/// [`reconstruct`] tolerates anything parseable.
pub async fn import_document(path: &Path) -> Result<Value, ImportError> {
    let text = tokio::fs::read_to_string(path).await?;
    let document = serde_json::from_str(&text)?;
    Ok(document)
}

/// Rebuild a field list from an imported document. Lossy by design:
/// nested objects come back as `Nested` fields with an empty child
/// list, not the source's actual nested properties. A document without
/// a `properties` object yields an empty list rather than failing.
pub fn reconstruct(document: &Value) -> Vec<Field> {
    let Some(properties) = document.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };
    properties
        .iter()
        .map(|(key, definition)| {
            let declared = definition.get("type").and_then(Value::as_str).unwrap_or("");
            Field::new(key, FieldType::from_declared(declared))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::convert;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("schema-builder-tui-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_reconstruct_scalar_fields() {
        let document = json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "age": { "type": "number" }
            }
        });
        let fields = reconstruct(&document);
        assert_eq!(
            fields,
            vec![
                Field::new("name", FieldType::String),
                Field::new("age", FieldType::Number),
            ]
        );
    }

    #[test]
    fn test_reconstruct_does_not_recurse_into_objects() {
        // Export-then-import is asymmetric on purpose: nested children
        // are dropped and the field comes back with an empty list.
        let tree = vec![Field {
            key: "address".to_string(),
            ty: FieldType::Nested,
            nested: vec![Field::new("city", FieldType::String)],
        }];
        let fields = reconstruct(&convert(&tree));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key, "address");
        assert_eq!(fields[0].ty, FieldType::Nested);
        assert!(fields[0].nested.is_empty());
    }

    #[test]
    fn test_reconstruct_passes_through_unsupported_types() {
        let document = json!({
            "type": "object",
            "properties": { "flag": { "type": "boolean" } }
        });
        let fields = reconstruct(&document);
        assert_eq!(fields[0].ty, FieldType::Other("boolean".into()));
    }

    #[test]
    fn test_reconstruct_missing_properties_yields_empty() {
        assert!(reconstruct(&json!({ "type": "object" })).is_empty());
        assert!(reconstruct(&json!({ "properties": 42 })).is_empty());
        assert!(reconstruct(&json!(null)).is_empty());
    }

    #[test]
    fn test_reconstruct_missing_type_defaults_to_other() {
        let document = json!({
            "type": "object",
            "properties": { "mystery": {} }
        });
        let fields = reconstruct(&document);
        assert_eq!(fields[0].ty, FieldType::Other(String::new()));
    }

    #[tokio::test]
    async fn test_export_then_import_round_trips_document() {
        let path = scratch_path("roundtrip.json");
        let document = json!({
            "type": "object",
            "properties": { "name": { "type": "string" } }
        });
        export_document(&document, &path).await.unwrap();
        let imported = import_document(&path).await.unwrap();
        assert_eq!(imported, document);
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_export_uses_two_space_indent() {
        let path = scratch_path("pretty.json");
        let document = json!({ "type": "object", "properties": {} });
        export_document(&document, &path).await.unwrap();
        let text = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(text, "{\n  \"type\": \"object\",\n  \"properties\": {}\n}");
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_import_malformed_json_fails() {
        let path = scratch_path("malformed.json");
        tokio::fs::write(&path, "not json at all").await.unwrap();
        let result = import_document(&path).await;
        assert!(matches!(result, Err(ImportError::Parse(_))));
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_import_missing_file_fails() {
        let result = import_document(&scratch_path("does-not-exist.json")).await;
        assert!(matches!(result, Err(ImportError::Read(_))));
    }
}
