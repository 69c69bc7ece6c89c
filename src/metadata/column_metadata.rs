use serde::{Deserialize, Serialize};

use crate::ColumnType;

/// Backend-facing description of one column, produced by the translator.
///
/// A record is built fresh per translation and owned by the caller. The
/// transport layer serializes it as-is; fields that do not apply to the
/// column's type stay `None` and are skipped on the wire, while the boolean
/// flags are always present so the backend never has to distinguish "absent"
/// from "false".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// `None` when the source type has no backend mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,
    /// Byte/char length hint; type-dependent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Set together with `scale`, only for decimal columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    pub nullable: bool,
    pub primary_key: bool,
    pub autoincrement: bool,
    /// Set only when `autoincrement` is true; never zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoincrement_value: Option<u64>,
}
