use crate::core::sql_type::SqlType;
use serde::{Deserialize, Serialize};

/// Declared metadata of a single table column.
///
/// `enum_values` is only populated for text, varchar and enum columns that
/// were declared with a restricted value set. `None` and `Some(vec![])` are
/// distinct: absence means the column was never given a value set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub sql_type: SqlType,
    pub is_primary_key: bool,
    pub not_null: bool,
    pub has_default: bool,
    pub enum_values: Option<Vec<String>>,
}

impl ColumnDescriptor {
    pub fn new(name: &str, sql_type: SqlType) -> Self {
        Self {
            name: name.to_string(),
            sql_type,
            is_primary_key: false,
            not_null: false,
            has_default: false,
            enum_values: None,
        }
    }

    pub fn primary_key(name: &str, sql_type: SqlType) -> Self {
        Self {
            is_primary_key: true,
            not_null: true,
            ..Self::new(name, sql_type)
        }
    }
}
