// Value formatter: turns a raw cell value into the literal text embedded in the
// INSERT statement. Embedded quote characters are not escaped; the output is meant
// for manual review, not execution as-is.

use crate::error::{Error, Result};
use crate::metadata::types::requires_quoting;
use crate::metadata::{ColumnMetadata, RawValue, TypeTag};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Unquoted literal text for `value` in a column tagged `tag`.
/// On failure returns the kind of value that has no formatting rule.
pub fn format_literal(value: &RawValue, tag: TypeTag) -> std::result::Result<String, &'static str> {
    match value {
        RawValue::Null => Ok("null".to_string()),
        RawValue::Text(s) => Ok(s.clone()),
        RawValue::Int(i) => Ok(i.to_string()),
        // Display for f64 is the shortest text that parses back to the same value.
        RawValue::Float(f) if f.is_finite() => Ok(f.to_string()),
        RawValue::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        RawValue::Guid(g) => Ok(g.hyphenated().to_string()),
        RawValue::DateTime(dt) => {
            let fmt = if tag == TypeTag::DateOnly {
                DATE_FORMAT
            } else {
                DATETIME_FORMAT
            };
            Ok(dt.format(fmt).to_string())
        }
        RawValue::Time(t) => Ok(t.format(TIME_FORMAT).to_string()),
        RawValue::Float(_) => Err("non-finite float"),
        RawValue::Bytes(_) => Err("bytes"),
    }
}

/// Placeholder for a column with no value: `null` when nullable, `''` otherwise.
pub fn default_literal(column: &ColumnMetadata) -> &'static str {
    if column.is_nullable {
        "null"
    } else {
        "''"
    }
}

/// Final cell text for `column`: the placeholder when `value` is absent, else the
/// formatted literal, quoted when the column's type requires it.
pub fn cell_literal(column: &ColumnMetadata, value: Option<&RawValue>) -> Result<String> {
    let value = match value {
        Some(v) => v,
        None => return Ok(default_literal(column).to_string()),
    };
    let tag = column.tag();
    let literal = format_literal(value, tag).map_err(|kind| Error::UnsupportedValueType {
        column: column.name.clone(),
        kind,
    })?;
    if requires_quoting(tag, &literal) {
        Ok(format!("'{}'", literal))
    } else {
        Ok(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{SqlType, NO_LENGTH};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn col(ty: SqlType, nullable: bool) -> ColumnMetadata {
        ColumnMetadata::new("c", ty, NO_LENGTH, nullable, 1)
    }

    fn sample_datetime() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(14, 5, 7, 26)
            .unwrap()
    }

    #[test]
    fn temporal_format_depends_on_tag() {
        let v = RawValue::DateTime(sample_datetime());
        assert_eq!(format_literal(&v, TypeTag::DateOnly).unwrap(), "2024-03-09");
        assert_eq!(
            format_literal(&v, TypeTag::Temporal).unwrap(),
            "2024-03-09 14:05:07.026"
        );
    }

    #[test]
    fn time_of_day_keeps_milliseconds() {
        let t = chrono::NaiveTime::from_hms_milli_opt(10, 11, 12, 5).unwrap();
        assert_eq!(format_literal(&RawValue::Time(t), TypeTag::Temporal).unwrap(), "10:11:12.005");
        let column = col(SqlType::Time, true);
        assert_eq!(cell_literal(&column, Some(&RawValue::Time(t))).unwrap(), "'10:11:12.005'");
    }

    #[test]
    fn scalar_literals() {
        assert_eq!(format_literal(&RawValue::Null, TypeTag::String).unwrap(), "null");
        assert_eq!(format_literal(&RawValue::Bool(true), TypeTag::Boolean).unwrap(), "1");
        assert_eq!(format_literal(&RawValue::Bool(false), TypeTag::Boolean).unwrap(), "0");
        assert_eq!(format_literal(&RawValue::Int(-42), TypeTag::Integer).unwrap(), "-42");
        // No escaping of embedded quotes.
        assert_eq!(
            format_literal(&RawValue::Text("O'Brien".into()), TypeTag::String).unwrap(),
            "O'Brien"
        );
        let g = Uuid::parse_str("936DA01F-9ABD-4D9D-80C7-02AF85C822A8").unwrap();
        assert_eq!(
            format_literal(&RawValue::Guid(g), TypeTag::Guid).unwrap(),
            "936da01f-9abd-4d9d-80c7-02af85c822a8"
        );
    }

    #[test]
    fn numeric_and_boolean_literals_parse_back() {
        for i in [0i64, 7, -1, i64::MAX, i64::MIN] {
            let text = format_literal(&RawValue::Int(i), TypeTag::Integer).unwrap();
            assert_eq!(text.parse::<i64>().unwrap(), i);
        }
        for f in [0.1f64, -2.5, 1e-7, 123456789.125, f64::MAX] {
            let text = format_literal(&RawValue::Float(f), TypeTag::Decimal).unwrap();
            assert_eq!(text.parse::<f64>().unwrap(), f);
        }
        for b in [true, false] {
            let text = format_literal(&RawValue::Bool(b), TypeTag::Boolean).unwrap();
            assert_eq!(text.parse::<u8>().unwrap() == 1, b);
        }
    }

    #[test]
    fn unsupported_shapes_are_reported() {
        assert_eq!(format_literal(&RawValue::Bytes(vec![1]), TypeTag::Other), Err("bytes"));
        assert!(format_literal(&RawValue::Float(f64::NAN), TypeTag::Decimal).is_err());

        let column = ColumnMetadata::new("payload", SqlType::VarBinary, 16, true, 3);
        match cell_literal(&column, Some(&RawValue::Bytes(vec![0xff]))) {
            Err(Error::UnsupportedValueType { column, kind }) => {
                assert_eq!(column, "payload");
                assert_eq!(kind, "bytes");
            }
            other => panic!("expected UnsupportedValueType, got {:?}", other),
        }
    }

    #[test]
    fn absent_values_use_nullability_placeholder() {
        assert_eq!(cell_literal(&col(SqlType::Int, false), None).unwrap(), "''");
        assert_eq!(cell_literal(&col(SqlType::Int, true), None).unwrap(), "null");
        assert_eq!(cell_literal(&col(SqlType::VarChar, true), None).unwrap(), "null");
        assert_eq!(cell_literal(&col(SqlType::Bit, false), None).unwrap(), "''");
    }

    #[test]
    fn cell_quoting_follows_column_type() {
        let int_col = col(SqlType::Int, false);
        let text_col = col(SqlType::NVarChar, true);
        assert_eq!(cell_literal(&int_col, Some(&RawValue::Int(7))).unwrap(), "7");
        assert_eq!(
            cell_literal(&text_col, Some(&RawValue::Text("Ann".into()))).unwrap(),
            "'Ann'"
        );
        // Numbers stored in character columns are still quoted.
        assert_eq!(cell_literal(&text_col, Some(&RawValue::Int(7))).unwrap(), "'7'");
        assert_eq!(cell_literal(&text_col, Some(&RawValue::Null)).unwrap(), "null");
        assert_eq!(
            cell_literal(&col(SqlType::Bit, false), Some(&RawValue::Bool(true))).unwrap(),
            "1"
        );
        assert_eq!(
            cell_literal(&col(SqlType::Date, false), Some(&RawValue::DateTime(sample_datetime())))
                .unwrap(),
            "'2024-03-09'"
        );
    }
}
