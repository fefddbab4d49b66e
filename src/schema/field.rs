//! Field tree model: typed field records and path-addressed mutation

/// Type of a schema field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    String,
    Number,
    /// Nested object with its own child fields
    Nested,
    /// Unrecognized type name carried through from an imported document.
    /// Never offered by the editor; preserved so re-export does not
    /// invent a different type.
    Other(String),
}

impl FieldType {
    /// Type name as it appears in the document
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Nested => "object",
            Self::Other(name) => name,
        }
    }

    /// Label shown in the field row
    pub fn label(&self) -> &str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Nested => "Nested Object",
            Self::Other(name) => name,
        }
    }

    /// Cycle through the editor-selectable types. An imported `Other`
    /// type re-enters the cycle at `String`.
    pub fn next(&self) -> Self {
        match self {
            Self::String => Self::Number,
            Self::Number => Self::Nested,
            Self::Nested => Self::String,
            Self::Other(_) => Self::String,
        }
    }

    /// Map a declared type name from an imported document. `"object"`
    /// becomes `Nested`; anything unrecognized is passed through
    /// unvalidated as `Other`.
    pub fn from_declared(name: &str) -> Self {
        match name {
            "string" => Self::String,
            "number" => Self::Number,
            "object" => Self::Nested,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A single field in the schema tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    /// Field key; may be empty (empty keys are skipped on conversion)
    pub key: String,
    pub ty: FieldType,
    /// Child fields. Always allocated; only meaningful when `ty` is
    /// `Nested`. Children added under a leaf surface in the document
    /// once the type is switched to `Nested`.
    pub nested: Vec<Field>,
}

impl Field {
    pub fn new(key: impl Into<String>, ty: FieldType) -> Self {
        Self {
            key: key.into(),
            ty,
            nested: Vec::new(),
        }
    }
}

/// Path to a field: child indices from the root list. The empty path
/// addresses the root list itself, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath(pub Vec<usize>);

impl FieldPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path extended by one child index
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }
}

/// A row in the flattened editor view
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub path: FieldPath,
    pub depth: usize,
}

/// The ordered, recursively nested collection of fields backing the
/// editor session
#[derive(Debug, Clone, Default)]
pub struct FieldTree {
    pub fields: Vec<Field>,
}

impl FieldTree {
    /// Resolve a path to a field. The root path resolves to `None`
    /// (it addresses the list, not a field).
    pub fn get(&self, path: &FieldPath) -> Option<&Field> {
        let (&last, parents) = path.0.split_last()?;
        let mut list = &self.fields;
        for &index in parents {
            list = &list.get(index)?.nested;
        }
        list.get(last)
    }

    pub fn get_mut(&mut self, path: &FieldPath) -> Option<&mut Field> {
        let (&last, parents) = path.0.split_last()?;
        let mut list = &mut self.fields;
        for &index in parents {
            list = &mut list.get_mut(index)?.nested;
        }
        list.get_mut(last)
    }

    /// The child list addressed by `parent` (the root list for the
    /// root path). `None` if the path does not resolve.
    fn list_mut(&mut self, parent: &FieldPath) -> Option<&mut Vec<Field>> {
        let mut list = &mut self.fields;
        for &index in &parent.0 {
            list = &mut list.get_mut(index)?.nested;
        }
        Some(list)
    }

    /// Append a blank string field to the list addressed by `parent`.
    /// Appending under a leaf field is allowed; the child only shows
    /// up in the document once the field's type is `Nested`.
    /// Silent no-op when the parent path does not resolve.
    pub fn add_field(&mut self, parent: &FieldPath) {
        if let Some(list) = self.list_mut(parent) {
            list.push(Field::default());
        }
    }

    /// Remove the field at `path`, discarding any children.
    /// Silent no-op when the path does not resolve.
    pub fn remove_field(&mut self, path: &FieldPath) {
        let Some((&last, parents)) = path.0.split_last() else {
            return;
        };
        if let Some(list) = self.list_mut(&FieldPath(parents.to_vec())) {
            if last < list.len() {
                list.remove(last);
            }
        }
    }

    /// Reset to an empty tree
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Depth-first pre-order walk of the rows the editor shows.
    /// Children are listed only under `Nested`-type fields, matching
    /// what the converter will surface.
    pub fn flatten(&self) -> Vec<FieldRow> {
        let mut rows = Vec::new();
        flatten_into(&self.fields, &FieldPath::root(), 0, &mut rows);
        rows
    }
}

fn flatten_into(fields: &[Field], parent: &FieldPath, depth: usize, rows: &mut Vec<FieldRow>) {
    for (index, field) in fields.iter().enumerate() {
        let path = parent.child(index);
        rows.push(FieldRow {
            path: path.clone(),
            depth,
        });
        if field.ty == FieldType::Nested {
            flatten_into(&field.nested, &path, depth + 1, rows);
        }
    }
}
