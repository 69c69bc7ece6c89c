use serde::{Deserialize, Serialize};

/// Normalized column type understood by the column-oriented backend.
///
/// This is the backend-agnostic half of the type mapping: every host logical
/// type either lands on one of these variants or stays unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnType {
    UnsignedLong,
    SignedLong,
    Double,
    Decimal,
    Date,
    Time,
    DateTime,
    String,
    Binary,
}
