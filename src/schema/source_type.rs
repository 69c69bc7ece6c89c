use serde::{Deserialize, Serialize};

/// Logical column type tag as declared by the host schema layer.
///
/// This is a closed set: the translator matches it exhaustively, so adding a
/// variant forces a deliberate mapping decision instead of silently falling
/// into the unmapped bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    /// 1-byte integer
    Tiny,
    /// 2-byte integer
    Short,
    /// 3-byte integer
    Int24,
    /// 4-byte integer
    Long,
    /// 8-byte integer
    LongLong,
    /// Year stored as a small integer
    Year,
    /// Single-precision float
    Float,
    /// Double-precision float
    Double,
    /// Exact decimal, legacy encoding
    Decimal,
    /// Exact decimal, current encoding
    NewDecimal,
    Date,
    /// Date with century, current encoding
    NewDate,
    /// Time of day
    Time,
    DateTime,
    Timestamp,
    /// Fixed-length character
    String,
    /// Variable-length character
    VarChar,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    /// Enumerated value, stored as its ordinal
    Enum,
    /// Column of the null type
    Null,
    Bit,
    Set,
    Geometry,
    /// Legacy variable-length string
    VarString,
}
