use crate::{classify::classify, kind::PropertyKind};
use schema_model::core::{column::ColumnDescriptor, sql_type::SqlType};
use serde::{Deserialize, Serialize};

// Audit columns maintained by the persistence layer; never hand-edited.
const COL_CREATED_AT: &str = "createdAt";
const COL_UPDATED_AT: &str = "updatedAt";

/// UI-facing metadata of one column.
///
/// Built once per column when the owning table is mapped, immutable after.
/// `path` mirrors the column name; `position` is the caller-assigned ordinal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyDescriptor {
    path: String,
    column: ColumnDescriptor,
    position: usize,
    reference: Option<String>,
}

impl PropertyDescriptor {
    pub fn new(column: ColumnDescriptor, position: usize, reference: Option<String>) -> Self {
        Self {
            path: column.name.clone(),
            column,
            position,
            reference,
        }
    }

    pub fn from_column(column: ColumnDescriptor) -> Self {
        Self::new(column, 0, None)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn kind(&self) -> PropertyKind {
        classify(&self.column, self.reference.as_deref())
    }

    pub fn is_id(&self) -> bool {
        self.column.is_primary_key
    }

    /// Audit columns and the primary key are owned by the system, not the form.
    pub fn is_editable(&self) -> bool {
        !self.is_id() && self.column.name != COL_CREATED_AT && self.column.name != COL_UPDATED_AT
    }

    pub fn is_required(&self) -> bool {
        self.column.not_null
    }

    pub fn is_sortable(&self) -> bool {
        self.kind() != PropertyKind::Reference
    }

    pub fn is_enum(&self) -> bool {
        match self.column.sql_type {
            SqlType::Enum => true,
            SqlType::Text | SqlType::VarChar => self
                .column
                .enum_values
                .as_ref()
                .is_some_and(|values| !values.is_empty()),
            _ => false,
        }
    }

    /// The declared value set, verbatim and in declaration order. `None` when
    /// the column is not an enum; an empty set is never invented.
    pub fn available_values(&self) -> Option<&[String]> {
        if self.is_enum() {
            self.column.enum_values.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_column() -> ColumnDescriptor {
        ColumnDescriptor {
            name: "status".to_string(),
            sql_type: SqlType::VarChar,
            is_primary_key: false,
            not_null: true,
            has_default: false,
            enum_values: Some(vec!["a".to_string(), "b".to_string()]),
        }
    }

    #[test]
    fn varchar_with_value_set_is_a_string_enum() {
        let prop = PropertyDescriptor::from_column(status_column());

        assert_eq!(prop.kind(), PropertyKind::String);
        assert!(prop.is_enum());
        assert_eq!(
            prop.available_values(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert!(prop.is_required());
        assert!(prop.is_editable());
        assert!(prop.is_sortable());
    }

    #[test]
    fn serial_primary_key_is_a_read_only_id() {
        let prop =
            PropertyDescriptor::from_column(ColumnDescriptor::primary_key("id", SqlType::Serial));

        assert_eq!(prop.kind(), PropertyKind::Number);
        assert!(prop.is_id());
        assert!(!prop.is_editable());
    }

    #[test]
    fn nullable_jsonb_is_optional_mixed() {
        let prop =
            PropertyDescriptor::from_column(ColumnDescriptor::new("metadata", SqlType::Jsonb));

        assert_eq!(prop.kind(), PropertyKind::Mixed);
        assert!(!prop.is_required());
    }

    #[test]
    fn audit_columns_are_locked_case_sensitively() {
        for name in ["createdAt", "updatedAt"] {
            let prop =
                PropertyDescriptor::from_column(ColumnDescriptor::new(name, SqlType::Timestamp));
            assert!(!prop.is_editable());
        }

        let prop =
            PropertyDescriptor::from_column(ColumnDescriptor::new("created_at", SqlType::Timestamp));
        assert!(prop.is_editable());
    }

    #[test]
    fn referenced_column_is_a_link_and_not_sortable() {
        let prop = PropertyDescriptor::new(
            ColumnDescriptor::new("author_id", SqlType::Integer),
            3,
            Some("users".to_string()),
        );

        assert_eq!(prop.kind(), PropertyKind::Reference);
        assert!(!prop.is_sortable());
        assert_eq!(prop.reference(), Some("users"));
        assert_eq!(prop.position(), 3);
    }

    #[test]
    fn unknown_type_stays_sortable() {
        let prop = PropertyDescriptor::from_column(ColumnDescriptor::new(
            "x",
            SqlType::Custom("ltree".to_string()),
        ));

        assert_eq!(prop.kind(), PropertyKind::Unknown);
        assert!(prop.is_sortable());
    }

    #[test]
    fn enum_tag_without_declared_values_yields_no_set() {
        let prop = PropertyDescriptor::from_column(ColumnDescriptor::new("mood", SqlType::Enum));

        assert!(prop.is_enum());
        assert_eq!(prop.available_values(), None);
    }

    #[test]
    fn text_with_empty_value_set_is_not_an_enum() {
        let mut column = ColumnDescriptor::new("notes", SqlType::Text);
        column.enum_values = Some(vec![]);
        let prop = PropertyDescriptor::from_column(column);

        assert!(!prop.is_enum());
        assert_eq!(prop.available_values(), None);
    }

    #[test]
    fn path_mirrors_column_name() {
        let prop = PropertyDescriptor::from_column(ColumnDescriptor::new("title", SqlType::Text));
        assert_eq!(prop.path(), "title");
        assert_eq!(prop.position(), 0);
    }
}
