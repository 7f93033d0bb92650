//! Maps a column's declared SQL type to the property kind the UI renders.

use crate::kind::PropertyKind;
use schema_model::core::{column::ColumnDescriptor, sql_type::SqlType};
use tracing::warn;

/// Classifies a column into its semantic property kind.
///
/// A resolved foreign-key reference wins over the SQL type: such columns
/// render as links to the related entity. A non-empty `reference` therefore
/// short-circuits the type dispatch entirely.
///
/// Columns with a `Custom` type tag have no mapping; they classify as
/// [`PropertyKind::Unknown`] and a diagnostic names the unhandled type.
pub fn classify(column: &ColumnDescriptor, reference: Option<&str>) -> PropertyKind {
    if reference.is_some_and(|r| !r.is_empty()) {
        return PropertyKind::Reference;
    }

    match &column.sql_type {
        SqlType::Serial
        | SqlType::SmallSerial
        | SqlType::BigSerial
        | SqlType::Integer
        | SqlType::SmallInt
        | SqlType::BigInt => PropertyKind::Number,
        SqlType::Numeric | SqlType::Real | SqlType::DoublePrecision => PropertyKind::Float,
        SqlType::Text | SqlType::VarChar | SqlType::Enum => PropertyKind::String,
        SqlType::Boolean => PropertyKind::Boolean,
        SqlType::Time | SqlType::Timestamp | SqlType::Date => PropertyKind::Datetime,
        SqlType::Json | SqlType::Jsonb | SqlType::Interval => PropertyKind::Mixed,
        SqlType::Uuid => PropertyKind::Uuid,
        SqlType::Custom(type_name) => {
            warn!("Unhandled column type: {type_name}");
            PropertyKind::Unknown
        }
    }
}
