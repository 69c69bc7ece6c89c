use crate::{ColumnDescriptor, ColumnMetadata, ColumnType, SourceType, TableDescriptor};

/// Translate one host column descriptor into a backend-facing metadata record.
///
/// Pure and infallible: a source type with no backend mapping yields a record
/// with `column_type: None` and defaults, which the backend interprets as
/// opaque. Nullability, autoincrement and primary-key detection run for every
/// column regardless of how the type dispatch went.
///
/// `autoincrement_counter` is the table's current autoincrement value; when
/// the table's autoincrement column is this column and the counter is still
/// zero, the record carries 1 so a first row never sees a zero value.
pub fn translate(
    column: &ColumnDescriptor,
    table: &TableDescriptor,
    autoincrement_counter: u64,
) -> ColumnMetadata {
    let mut metadata = ColumnMetadata::default();

    match column.source_type {
        SourceType::Tiny
        | SourceType::Short
        | SourceType::Int24
        | SourceType::Long
        | SourceType::LongLong
        | SourceType::Year => {
            metadata.column_type = Some(if column.unsigned {
                ColumnType::UnsignedLong
            } else {
                ColumnType::SignedLong
            });
            // Integers travel as 8 bytes whatever their declared width.
            metadata.max_length = Some(8);
        }
        SourceType::Float | SourceType::Double => {
            metadata.column_type = Some(ColumnType::Double);
            metadata.max_length = Some(8);
        }
        SourceType::Decimal | SourceType::NewDecimal => {
            metadata.column_type = Some(ColumnType::Decimal);
            metadata.precision = Some(column.precision);
            metadata.scale = Some(column.scale);
            metadata.max_length = Some(column.length);
        }
        SourceType::Date | SourceType::NewDate => {
            metadata.column_type = Some(ColumnType::Date);
            metadata.max_length = Some(column.length);
        }
        SourceType::Time => {
            metadata.column_type = Some(ColumnType::Time);
            metadata.max_length = Some(column.length);
        }
        SourceType::DateTime | SourceType::Timestamp => {
            metadata.column_type = Some(ColumnType::DateTime);
            metadata.max_length = Some(column.length);
        }
        SourceType::String | SourceType::VarChar => {
            metadata.max_length = Some(column.length);
            metadata.column_type = Some(if column.binary {
                ColumnType::Binary
            } else {
                ColumnType::String
            });
        }
        SourceType::TinyBlob
        | SourceType::Blob
        | SourceType::MediumBlob
        | SourceType::LongBlob => {
            // No length hint: the backend discovers it from the value.
            metadata.column_type = Some(ColumnType::Binary);
        }
        SourceType::Enum => {
            // Enum ordinals are unsigned integers.
            metadata.column_type = Some(ColumnType::UnsignedLong);
        }
        SourceType::Null
        | SourceType::Bit
        | SourceType::Set
        | SourceType::Geometry
        | SourceType::VarString => {
            // Deliberate fallback: the record keeps its defaults.
        }
    }

    if column.nullable {
        metadata.nullable = true;
    }

    if let Some(autoincrement_field) = table.autoincrement_field() {
        if std::ptr::eq(autoincrement_field, column) {
            metadata.autoincrement = true;
            metadata.autoincrement_value = Some(if autoincrement_counter == 0 {
                1
            } else {
                autoincrement_counter
            });
        }
    }

    if let Some(key) = &table.primary_key {
        // Only the first key part is checked; later parts of a composite
        // key are not marked.
        if let Some(part) = key.first_part() {
            if part.column_name == column.name {
                metadata.primary_key = true;
            }
        }
    }

    metadata
}
