// Metadata model: a table's columns as reported by the schema source, and the raw
// cell values a data query hands back.

pub mod types;

use chrono::{NaiveDateTime, NaiveTime};
use std::collections::HashMap;
use uuid::Uuid;

pub use types::{SqlType, TypeTag};

/// Length sentinel for columns without a declared maximum length.
pub const NO_LENGTH: i32 = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMetadata {
    pub name: String,
    pub sql_type: SqlType,
    /// Declared character length, or [`NO_LENGTH`].
    pub length: i32,
    pub is_nullable: bool,
    pub position: i32,
}

impl ColumnMetadata {
    pub fn new(
        name: impl Into<String>,
        sql_type: SqlType,
        length: i32,
        is_nullable: bool,
        position: i32,
    ) -> Self {
        Self {
            name: name.into(),
            sql_type,
            length,
            is_nullable,
            position,
        }
    }

    pub fn tag(&self) -> TypeTag {
        self.sql_type.tag()
    }

    pub fn has_length(&self) -> bool {
        self.length != NO_LENGTH
    }

    /// `varchar(50)` style description used in the inline comment.
    pub fn type_description(&self) -> String {
        if self.has_length() {
            format!("{}({})", self.sql_type.name(), self.length)
        } else {
            self.sql_type.name().to_string()
        }
    }

    pub fn nullable_description(&self) -> &'static str {
        if self.is_nullable {
            "null"
        } else {
            "not null"
        }
    }
}

/// A table's schema snapshot. Always holds at least one column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    table_name: String,
    columns: Vec<ColumnMetadata>,
}

impl TableMetadata {
    /// Returns None when `columns` is empty. Column order is kept as given.
    pub fn new(table_name: impl Into<String>, columns: Vec<ColumnMetadata>) -> Option<Self> {
        if columns.is_empty() {
            return None;
        }
        Some(Self {
            table_name: table_name.into(),
            columns,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.columns
    }
}

/// A raw cell value as materialized by a data query.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// The database null marker.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Guid(Uuid),
    DateTime(NaiveDateTime),
    /// Time of day, from `time` columns.
    Time(NaiveTime),
    Bytes(Vec<u8>),
}

impl RawValue {
    /// Short name of the runtime shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Int(_) => "int",
            RawValue::Float(_) => "float",
            RawValue::Text(_) => "text",
            RawValue::Guid(_) => "guid",
            RawValue::DateTime(_) => "datetime",
            RawValue::Time(_) => "time",
            RawValue::Bytes(_) => "bytes",
        }
    }
}

/// One data row keyed by column name. Rows may omit columns.
pub type DataRow = HashMap<String, RawValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_description_includes_length_only_when_declared() {
        let name = ColumnMetadata::new("name", SqlType::VarChar, 50, true, 2);
        let id = ColumnMetadata::new("id", SqlType::Int, NO_LENGTH, false, 1);
        assert_eq!(name.type_description(), "varchar(50)");
        assert_eq!(id.type_description(), "int");
        assert_eq!(name.nullable_description(), "null");
        assert_eq!(id.nullable_description(), "not null");
    }

    #[test]
    fn table_requires_columns() {
        assert!(TableMetadata::new("empty", Vec::new()).is_none());
        let cols = vec![
            ColumnMetadata::new("b", SqlType::Int, NO_LENGTH, false, 2),
            ColumnMetadata::new("a", SqlType::Int, NO_LENGTH, false, 1),
        ];
        let table = TableMetadata::new("t", cols).unwrap();
        // Order is the caller's responsibility and is preserved.
        let names: Vec<_> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }
}
