//! Static schema descriptors.
//!
//! Every record type declares its table and ordered non-identifier columns
//! once. The generic finders and `save` build their statements from this
//! descriptor instead of inspecting record fields at runtime.

/// Storage type of a column, used to decode result fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Real,
    Text,
}

/// A named, typed column. Nullability is decided by the record mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Integer,
        }
    }

    pub const fn real(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Real,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
        }
    }
}

/// Maps an entity type to its table and the columns `save` writes.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Entity type name, used in logs.
    pub entity: &'static str,
    pub table: &'static str,
    /// Non-identifier columns in insert/update order.
    pub fields: &'static [Column],
}

impl Schema {
    /// The identifier column shared by every table. Always the first column.
    pub const ID: Column = Column::integer("id");

    /// Declares a schema. Evaluated in const context, so a malformed mapping
    /// is rejected at compile time.
    pub const fn new(entity: &'static str, table: &'static str, fields: &'static [Column]) -> Self {
        assert!(!entity.is_empty(), "schema has no entity name");
        assert!(!table.is_empty(), "schema has no table name");
        assert!(!fields.is_empty(), "schema declares no fields");

        let mut i = 0;
        while i < fields.len() {
            assert!(
                !const_str_eq(fields[i].name, Self::ID.name),
                "the identifier column must not be listed as a field"
            );
            i += 1;
        }

        Self {
            entity,
            table,
            fields,
        }
    }

    /// All columns as returned by `SELECT *`: identifier first.
    pub fn columns(&self) -> Vec<Column> {
        std::iter::once(Self::ID)
            .chain(self.fields.iter().copied())
            .collect()
    }

    pub fn select_all_sql(&self) -> String {
        format!("SELECT * FROM {}", self.table)
    }

    pub fn select_by_id_sql(&self) -> String {
        format!(
            "SELECT * FROM {table} WHERE {table}.{id} = ?",
            table = self.table,
            id = Self::ID.name
        )
    }

    pub fn insert_sql(&self) -> String {
        let names: Vec<&str> = self.fields.iter().map(|c| c.name).collect();
        let placeholders = vec!["?"; self.fields.len()];
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            names.join(", "),
            placeholders.join(", ")
        )
    }

    /// Binds the field values first, then the identifier.
    pub fn update_sql(&self) -> String {
        let assignments: Vec<String> = self
            .fields
            .iter()
            .map(|c| format!("{} = ?", c.name))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {} = ?",
            self.table,
            assignments.join(", "),
            Self::ID.name
        )
    }
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET_FIELDS: &[Column] = &[Column::text("name"), Column::integer("owner_id")];
    const WIDGETS: Schema = Schema::new("Widget", "widgets", WIDGET_FIELDS);

    #[test]
    fn test_columns_put_identifier_first() {
        let names: Vec<&str> = WIDGETS.columns().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["id", "name", "owner_id"]);
    }

    #[test]
    fn test_select_statements() {
        assert_eq!(WIDGETS.select_all_sql(), "SELECT * FROM widgets");
        assert_eq!(
            WIDGETS.select_by_id_sql(),
            "SELECT * FROM widgets WHERE widgets.id = ?"
        );
    }

    #[test]
    fn test_insert_excludes_identifier() {
        assert_eq!(
            WIDGETS.insert_sql(),
            "INSERT INTO widgets (name, owner_id) VALUES (?, ?)"
        );
    }

    #[test]
    fn test_update_sets_every_field_keyed_by_identifier() {
        assert_eq!(
            WIDGETS.update_sql(),
            "UPDATE widgets SET name = ?, owner_id = ? WHERE id = ?"
        );
    }

    #[test]
    fn test_const_str_eq() {
        assert!(const_str_eq("id", "id"));
        assert!(!const_str_eq("id", "ids"));
        assert!(!const_str_eq("id", "ib"));
    }
}
