// Insert statement builder: header line, one commented tuple per row, with a single
// placeholder tuple when there is no data.

use crate::error::Result;
use crate::generator::align::{compute_column_widths, RenderedField};
use crate::generator::format::cell_literal;
use crate::logger;
use crate::metadata::{ColumnMetadata, DataRow, TableMetadata};

const INDENT: &str = "    ";

/// Render an INSERT for `table_name` with one tuple per entry of `rows`.
///
/// Columns are emitted in the order given. With no rows a single placeholder tuple
/// is produced, using `null` for nullable columns and `''` for the rest; the same
/// placeholder fills in any column a row has no entry for. The first value that
/// cannot be formatted aborts the whole build.
///
/// Table and column names are written verbatim, without identifier quoting; names
/// that are keywords (e.g. `order`) need quoting by hand before the text is run.
pub fn build(table_name: &str, columns: &[ColumnMetadata], rows: &[DataRow]) -> Result<String> {
    logger::debug(&format!(
        "BuildInsert: table {} ({} columns, {} rows)",
        table_name,
        columns.len(),
        rows.len()
    ));

    let widths = compute_column_widths(columns);

    // None stands for the placeholder row.
    let placeholder = [None];
    let real: Vec<Option<&DataRow>> = rows.iter().map(Some).collect();
    let row_refs: &[Option<&DataRow>] = if real.is_empty() {
        &placeholder[..]
    } else {
        &real[..]
    };

    let mut tuples = Vec::with_capacity(row_refs.len());
    for &row in row_refs {
        let mut lines = Vec::with_capacity(columns.len());
        for column in columns {
            let value = row.and_then(|r| r.get(&column.name));
            let literal = cell_literal(column, value)?;
            lines.push(format!(
                "{}{}",
                INDENT,
                RenderedField::new(column, &widths, literal).to_line()
            ));
        }
        tuples.push(format!("(\n{}\n)", lines.join(",\n")));
    }

    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    let mut out = format!("insert into {} ({}) values\n", table_name, names.join(", "));
    out.push_str(&tuples.join(",\n"));
    Ok(out)
}

/// [`build`] over a schema snapshot.
pub fn build_table(table: &TableMetadata, rows: &[DataRow]) -> Result<String> {
    build(table.table_name(), table.columns(), rows)
}
