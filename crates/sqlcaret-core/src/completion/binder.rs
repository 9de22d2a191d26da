//! Binds resolved table references to the schema catalog.
//!
//! Unknown tables and a missing catalog are not errors; they simply contribute no
//! candidates.

use crate::types::{SchemaCatalog, TableReference};

/// Every table name in the catalog.
pub(crate) fn catalog_tables(catalog: Option<&SchemaCatalog>) -> Vec<String> {
    catalog
        .map(|catalog| catalog.table_names().map(str::to_string).collect())
        .unwrap_or_default()
}

/// The first reference that names a table.
pub(crate) fn first_table(references: &[TableReference]) -> Option<&TableReference> {
    references.iter().find(|reference| reference.table.is_some())
}

/// Columns of the first referenced table, in catalog order.
pub(crate) fn columns_of_first_table(
    catalog: Option<&SchemaCatalog>,
    references: &[TableReference],
) -> Vec<String> {
    let Some(catalog) = catalog else {
        return Vec::new();
    };
    let Some(reference) = first_table(references) else {
        return Vec::new();
    };
    let Some(name) = reference.table.as_deref() else {
        return Vec::new();
    };
    catalog
        .find_table(name, reference.schema_name())
        .map(|table| table.columns.iter().map(|column| column.name.clone()).collect())
        .unwrap_or_default()
}
