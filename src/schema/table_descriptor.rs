use serde::{Deserialize, Serialize};

use crate::ColumnDescriptor;

/// One part of a key definition, naming the column it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPart {
    pub column_name: String,
}

impl KeyPart {
    pub fn new(column_name: &str) -> Self {
        Self { column_name: column_name.to_string() }
    }
}

/// Ordered list of key parts making up one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDefinition {
    pub parts: Vec<KeyPart>,
}

impl KeyDefinition {
    pub fn new(parts: Vec<KeyPart>) -> Self {
        Self { parts }
    }

    pub fn on_columns(column_names: &[&str]) -> Self {
        Self {
            parts: column_names.iter().map(|name| KeyPart::new(name)).collect(),
        }
    }

    pub fn first_part(&self) -> Option<&KeyPart> {
        self.parts.first()
    }
}

/// One table as declared by the host schema layer.
///
/// `autoincrement_column` is an index into `columns`; `None` means the table
/// has no autoincrement column. A table with no primary key carries
/// `primary_key: None` rather than a sentinel index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
    pub autoincrement_column: Option<usize>,
    pub primary_key: Option<KeyDefinition>,
}

impl TableDescriptor {
    pub fn new(name: &str, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            autoincrement_column: None,
            primary_key: None,
        }
    }

    pub fn with_autoincrement_column(mut self, index: usize) -> Self {
        self.autoincrement_column = Some(index);
        self
    }

    pub fn with_primary_key(mut self, key: KeyDefinition) -> Self {
        self.primary_key = Some(key);
        self
    }

    /// The column the table's autoincrement reference points at, if any.
    pub fn autoincrement_field(&self) -> Option<&ColumnDescriptor> {
        self.autoincrement_column.and_then(|index| self.columns.get(index))
    }
}
