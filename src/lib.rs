// sqlinsertgen: generate a commented, column-aligned INSERT statement from a
// table's schema and, optionally, rows selected by a predicate.

pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod metadata;
pub mod source;

pub use error::{Error, Result};
pub use generator::{build, build_table, generate, GenerateRequest};
pub use metadata::{ColumnMetadata, DataRow, RawValue, TableMetadata};
