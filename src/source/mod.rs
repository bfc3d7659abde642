// Schema and data sources: the collaborators that turn a database + table name into
// metadata and rows for the generator.

pub mod sqlite;

use crate::error::Result;
use crate::metadata::{DataRow, TableMetadata};

pub use sqlite::SqliteSource;

/// Looks up a table's columns.
pub trait SchemaSource {
    /// Columns ordered by position, with names in `blacklist` removed.
    /// Fails with `TableNotFound` when the table does not exist.
    fn table_metadata(&self, table: &str, blacklist: &[String]) -> Result<TableMetadata>;
}

/// Fetches the rows matching a predicate.
pub trait DataSource {
    /// Rows of `table` matching the SQL `predicate`. Cells of columns that are not
    /// part of `table` are dropped.
    fn rows(&self, table: &TableMetadata, predicate: &str) -> Result<Vec<DataRow>>;
}
