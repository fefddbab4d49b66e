//! Field tree to document conversion

use super::field::{Field, FieldType};
use serde_json::{json, Map, Value};

/// Convert an ordered field list into the schema document
/// `{"type": "object", "properties": {...}}`.
///
/// Fields with empty keys are skipped. A later duplicate key overwrites
/// the earlier definition but keeps the earlier key's position. Pure:
/// the same tree always yields a structurally identical document.
pub fn convert(fields: &[Field]) -> Value {
    let mut properties = Map::new();
    for field in fields {
        if field.key.is_empty() {
            continue;
        }
        let definition = match &field.ty {
            FieldType::String => json!({ "type": "string" }),
            FieldType::Number => json!({ "type": "number" }),
            FieldType::Other(name) => json!({ "type": name }),
            FieldType::Nested => {
                if field.nested.is_empty() {
                    json!({ "type": "object", "properties": {} })
                } else {
                    convert(&field.nested)
                }
            }
        };
        properties.insert(field.key.clone(), definition);
    }
    json!({ "type": "object", "properties": properties })
}

/// Count every object key in a document, at every depth. Array elements
/// are traversed element-wise. Drives the preview badge only.
pub fn field_count(value: &Value) -> usize {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(_, child)| 1 + field_count(child))
            .sum(),
        Value::Array(items) => items.iter().map(field_count).sum(),
        _ => 0,
    }
}
