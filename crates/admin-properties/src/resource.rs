use crate::descriptor::PropertyDescriptor;
use schema_model::core::table::TableDescriptor;
use std::collections::HashMap;

/// Maps a table's columns to properties in declaration order.
///
/// `references` carries the foreign-key targets resolved elsewhere, keyed by
/// column name; columns it names render as links to the related entity.
pub fn properties_for(
    table: &TableDescriptor,
    references: &HashMap<String, String>,
) -> Vec<PropertyDescriptor> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(position, column)| {
            let reference = references.get(&column.name).cloned();
            PropertyDescriptor::new(column.clone(), position, reference)
        })
        .collect()
}
