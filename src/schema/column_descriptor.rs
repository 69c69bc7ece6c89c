use serde::{Deserialize, Serialize};

use crate::SourceType;

/// One table column as declared by the host schema layer.
///
/// Consumed read-only by the translator. `length`, `precision` and `scale`
/// carry whatever the host declared; which of them is meaningful depends on
/// `source_type` (e.g. `precision`/`scale` only matter for exact decimals).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub source_type: SourceType,
    /// Signedness is an explicit flag, not inferred from the type tag.
    pub unsigned: bool,
    /// Declared byte length
    pub length: u32,
    pub precision: u32,
    pub scale: u32,
    /// Distinguishes binary from text for the character types.
    pub binary: bool,
    pub nullable: bool,
}

impl ColumnDescriptor {
    pub fn new(name: &str, source_type: SourceType) -> Self {
        Self {
            name: name.to_string(),
            source_type,
            unsigned: false,
            length: 0,
            precision: 0,
            scale: 0,
            binary: false,
            nullable: false,
        }
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    pub fn with_precision_scale(mut self, precision: u32, scale: u32) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    pub fn binary(mut self) -> Self {
        self.binary = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}
