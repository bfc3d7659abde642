// SQLite-backed schema and data source. Schema comes from PRAGMA table_info; stored
// values are coerced to the shapes the formatter expects based on the declared type.

use crate::error::{Error, Result};
use crate::logger;
use crate::metadata::types::classify;
use crate::metadata::{
    ColumnMetadata, DataRow, RawValue, SqlType, TableMetadata, TypeTag, NO_LENGTH,
};
use crate::source::{DataSource, SchemaSource};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use rusqlite::types::Value;
use rusqlite::Connection;
use std::path::Path;
use uuid::Uuid;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub struct SqliteSource {
    conn: Connection,
    database: String,
    declared_type_re: Regex,
}

impl SqliteSource {
    /// Open the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        logger::debug(&format!("SqliteSource: Opening database {}", path.display()));
        let conn = Connection::open(path)?;
        Ok(Self::new(conn, path.display().to_string()))
    }

    /// Wrap an existing connection. `database` is only used in error messages.
    pub fn new(conn: Connection, database: impl Into<String>) -> Self {
        // name, optional "(n)" / "(max)" / "(p,s)" suffix.
        let declared_type_re = Regex::new(
            r"(?i)^\s*([a-z_][a-z0-9_]*)\s*(?:\(\s*(\d+|max)\s*(?:,\s*\d+\s*)?\))?\s*$",
        )
        .expect("valid declared type regex");
        Self {
            conn,
            database: database.into(),
            declared_type_re,
        }
    }

    // Split "varchar(50)" into its type and the length to report.
    fn parse_declared_type(&self, declared: &str) -> Result<(SqlType, i32)> {
        let unknown = || Error::UnknownType {
            type_name: declared.to_string(),
        };
        let cap = self.declared_type_re.captures(declared).ok_or_else(unknown)?;
        let sql_type = classify(&cap[1])?;
        let length = match cap.get(2) {
            Some(m) if reports_length(sql_type) => {
                if m.as_str().eq_ignore_ascii_case("max") {
                    NO_LENGTH
                } else {
                    m.as_str().parse().map_err(|_| unknown())?
                }
            }
            _ => NO_LENGTH,
        };
        Ok((sql_type, length))
    }
}

// Double-quoted SQL identifier with embedded quotes doubled.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

// Only character and binary types carry a maximum length.
fn reports_length(sql_type: SqlType) -> bool {
    sql_type.tag() == TypeTag::String || matches!(sql_type, SqlType::Binary | SqlType::VarBinary)
}

impl SchemaSource for SqliteSource {
    fn table_metadata(&self, table: &str, blacklist: &[String]) -> Result<TableMetadata> {
        logger::debug(&format!("RetrieveMetadata: table {} in {}", table, self.database));
        let query = format!("PRAGMA table_info({})", quote_ident(table));
        let mut stmt = self.conn.prepare(&query)?;
        let raw = stmt
            .query_map([], |row| {
                let cid: i32 = row.get(0)?;
                let name: String = row.get(1)?;
                let declared: String = row.get(2)?;
                let notnull: i64 = row.get(3)?;
                Ok((cid, name, declared, notnull != 0))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if raw.is_empty() {
            return Err(Error::TableNotFound {
                table: table.to_string(),
                database: self.database.clone(),
            });
        }

        let mut columns = Vec::with_capacity(raw.len());
        for (cid, name, declared, notnull) in raw {
            if blacklist.iter().any(|b| b == &name) {
                logger::debug(&format!("RetrieveMetadata: skipping blacklisted column {}", name));
                continue;
            }
            let (sql_type, length) = self.parse_declared_type(&declared)?;
            columns.push(ColumnMetadata::new(name, sql_type, length, !notnull, cid + 1));
        }
        columns.sort_by_key(|c| c.position);

        logger::debug(&format!(
            "RetrieveMetadata: table {} has {} columns",
            table,
            columns.len()
        ));
        TableMetadata::new(table, columns).ok_or_else(|| Error::NoColumns {
            table: table.to_string(),
        })
    }
}

impl DataSource for SqliteSource {
    fn rows(&self, table: &TableMetadata, predicate: &str) -> Result<Vec<DataRow>> {
        let query = format!(
            "select * from {} where {}",
            quote_ident(table.table_name()),
            predicate
        );
        logger::debug(&format!("FetchRows: {}", query));
        let mut stmt = self.conn.prepare(&query)?;

        // Map result positions to known columns once.
        let targets: Vec<Option<&ColumnMetadata>> = stmt
            .column_names()
            .iter()
            .map(|name| table.columns().iter().find(|c| c.name == *name))
            .collect();

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut data = DataRow::new();
            for (idx, target) in targets.iter().enumerate() {
                if let Some(column) = target {
                    let value: Value = row.get(idx)?;
                    data.insert(column.name.clone(), coerce(column, value)?);
                }
            }
            out.push(data);
        }

        logger::debug(&format!("FetchRows: {} rows", out.len()));
        Ok(out)
    }
}

// Storage classes are loose in SQLite; recover the declared shape where it matters.
fn coerce(column: &ColumnMetadata, value: Value) -> Result<RawValue> {
    let invalid = |value: &str, reason: &str| Error::InvalidValue {
        column: column.name.clone(),
        value: value.to_string(),
        reason: reason.to_string(),
    };
    let tag = column.tag();
    Ok(match value {
        Value::Null => RawValue::Null,
        Value::Integer(i) if tag == TypeTag::Boolean => RawValue::Bool(i != 0),
        Value::Integer(i) => RawValue::Int(i),
        Value::Real(f) => RawValue::Float(f),
        Value::Text(s) => match tag {
            TypeTag::Guid => RawValue::Guid(
                Uuid::parse_str(s.trim()).map_err(|e| invalid(&s, &e.to_string()))?,
            ),
            TypeTag::Temporal if column.sql_type == SqlType::Time => RawValue::Time(
                parse_time(&s).ok_or_else(|| invalid(&s, "not a time of day"))?,
            ),
            TypeTag::Temporal | TypeTag::DateOnly => RawValue::DateTime(
                parse_datetime(&s).ok_or_else(|| invalid(&s, "not a date or datetime"))?,
            ),
            _ => RawValue::Text(s),
        },
        Value::Blob(b) if tag == TypeTag::Guid => {
            let guid = Uuid::from_slice(&b)
                .map_err(|e| invalid(&format!("<{} bytes>", b.len()), &e.to_string()))?;
            RawValue::Guid(guid)
        }
        Value::Blob(b) => RawValue::Bytes(b),
    })
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    ["%H:%M:%S%.f", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
