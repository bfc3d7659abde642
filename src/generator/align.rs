// Alignment engine: pads every column's name, type and nullability description to
// the widest value in the table so the inline comments line up across rows.

use crate::metadata::ColumnMetadata;

pub const FILL_CHAR: char = '-';

/// Widest rendered name, type description and nullability description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name: usize,
    pub type_desc: usize,
    pub nullable: usize,
}

/// Measure all columns once; the result is reused for every row.
pub fn compute_column_widths(columns: &[ColumnMetadata]) -> ColumnWidths {
    columns.iter().fold(ColumnWidths::default(), |w, c| ColumnWidths {
        name: w.name.max(text_len(&c.name)),
        type_desc: w.type_desc.max(text_len(&c.type_description())),
        nullable: w.nullable.max(text_len(c.nullable_description())),
    })
}

/// Right-pad `text` with [`FILL_CHAR`] up to `width` characters. Never truncates.
pub fn pad(text: &str, width: usize) -> String {
    let len = text_len(text);
    if len >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + width - len);
    out.push_str(text);
    out.extend(std::iter::repeat(FILL_CHAR).take(width - len));
    out
}

fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// One column of one row, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub name: String,
    pub type_desc: String,
    pub nullable: String,
    pub literal: String,
}

impl RenderedField {
    pub fn new(column: &ColumnMetadata, widths: &ColumnWidths, literal: String) -> Self {
        Self {
            name: pad(&column.name, widths.name),
            type_desc: pad(&column.type_description(), widths.type_desc),
            nullable: pad(column.nullable_description(), widths.nullable),
            literal,
        }
    }

    /// `/* name type nullable */ literal`
    pub fn to_line(&self) -> String {
        format!(
            "/* {} {} {} */ {}",
            self.name, self.type_desc, self.nullable, self.literal
        )
    }
}
