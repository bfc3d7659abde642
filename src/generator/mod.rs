// Generator module: value formatting, column alignment and INSERT assembly.

pub mod align;
pub mod format;
pub mod insert;

use crate::error::Result;
use crate::logger;
use crate::source::{DataSource, SchemaSource};

pub use insert::{build, build_table};

/// What to generate: a table, and optionally a predicate selecting rows to fill in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    pub table: String,
    pub predicate: Option<String>,
}

impl GenerateRequest {
    pub fn new(table: impl Into<String>, predicate: Option<String>) -> Self {
        Self {
            table: table.into(),
            predicate,
        }
    }

    /// The predicate, if it is non-blank.
    pub fn data_predicate(&self) -> Option<&str> {
        self.predicate
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Look up the table's schema, fetch rows when a predicate is given, and build the
/// INSERT. Without a predicate the statement holds a single placeholder tuple.
pub fn generate<S>(source: &S, request: &GenerateRequest, blacklist: &[String]) -> Result<String>
where
    S: SchemaSource + DataSource,
{
    let table = source.table_metadata(&request.table, blacklist)?;
    let rows = match request.data_predicate() {
        Some(predicate) => source.rows(&table, predicate)?,
        None => {
            logger::debug("Generate: no predicate, schema-only insert");
            Vec::new()
        }
    };
    build_table(&table, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::metadata::{ColumnMetadata, DataRow, RawValue, SqlType, TableMetadata, NO_LENGTH};
    use std::cell::Cell;

    // In-memory source that records whether rows were requested.
    struct FakeSource {
        rows_called: Cell<bool>,
    }

    impl SchemaSource for FakeSource {
        fn table_metadata(&self, table: &str, blacklist: &[String]) -> Result<TableMetadata> {
            if table != "users" {
                return Err(Error::TableNotFound {
                    table: table.to_string(),
                    database: "fake".to_string(),
                });
            }
            let columns = vec![
                ColumnMetadata::new("id", SqlType::Int, NO_LENGTH, false, 1),
                ColumnMetadata::new("name", SqlType::VarChar, 50, true, 2),
            ]
            .into_iter()
            .filter(|c| !blacklist.contains(&c.name))
            .collect();
            TableMetadata::new(table, columns).ok_or(Error::NoColumns {
                table: table.to_string(),
            })
        }
    }

    impl DataSource for FakeSource {
        fn rows(&self, _table: &TableMetadata, predicate: &str) -> Result<Vec<DataRow>> {
            self.rows_called.set(true);
            assert_eq!(predicate, "id = 7");
            let mut row = DataRow::new();
            row.insert("id".into(), RawValue::Int(7));
            row.insert("name".into(), RawValue::Text("Ann".into()));
            Ok(vec![row])
        }
    }

    fn fake() -> FakeSource {
        FakeSource {
            rows_called: Cell::new(false),
        }
    }

    #[test]
    fn blank_predicate_skips_data_lookup() {
        let src = fake();
        let req = GenerateRequest::new("users", Some("   ".into()));
        let sql = generate(&src, &req, &[]).unwrap();
        assert!(!src.rows_called.get());
        assert!(sql.contains("*/ ''"));
    }

    #[test]
    fn predicate_fills_rows() {
        let src = fake();
        let req = GenerateRequest::new("users", Some(" id = 7 ".into()));
        let sql = generate(&src, &req, &[]).unwrap();
        assert!(src.rows_called.get());
        assert!(sql.contains("*/ 7,"));
        assert!(sql.contains("*/ 'Ann'"));
    }

    #[test]
    fn blacklist_is_passed_to_schema_source() {
        let sql = generate(&fake(), &GenerateRequest::new("users", None), &["name".to_string()]).unwrap();
        assert!(sql.starts_with("insert into users (id) values"));
    }

    #[test]
    fn table_not_found_propagates() {
        let err = generate(&fake(), &GenerateRequest::new("ghosts", None), &[]).unwrap_err();
        assert!(matches!(err, Error::TableNotFound { .. }));
    }
}
