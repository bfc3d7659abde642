// Error taxonomy shared by the generator, the schema/data sources and the CLI.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A declared column type has no entry in the classification table.
    #[error("couldn't find the db type for string: '{type_name}'")]
    UnknownType { type_name: String },

    /// A cell value has a runtime shape with no formatting rule.
    #[error("column '{column}': unsupported value type {kind}")]
    UnsupportedValueType { column: String, kind: &'static str },

    #[error("the table '{table}' wasn't found in the database '{database}'")]
    TableNotFound { table: String, database: String },

    /// Every column of the table was excluded by the blacklist.
    #[error("the table '{table}' has no columns left after applying the column blacklist")]
    NoColumns { table: String },

    /// A stored value could not be coerced to the column's declared type.
    #[error("column '{column}': invalid value '{value}': {reason}")]
    InvalidValue {
        column: String,
        value: String,
        reason: String,
    },

    /// No configuration existed; a default one was written for the user to fill in.
    #[error("configuration file not found, a default one was created at '{}'", .path.display())]
    ConfigCreated { path: PathBuf },

    #[error("missing required value: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
