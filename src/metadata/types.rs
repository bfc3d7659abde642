// Type classifier: maps declared SQL Server type names to a closed set of types
// and decides which literals must be wrapped in single quotes.

use crate::error::{Error, Result};

/// Normalized classification driving quoting and temporal formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Integer,
    Decimal,
    Boolean,
    Money,
    String,
    Temporal,
    DateOnly,
    Guid,
    Other,
}

impl TypeTag {
    /// Tags whose literals are emitted bare.
    pub fn is_unquoted(self) -> bool {
        matches!(
            self,
            TypeTag::Integer | TypeTag::Decimal | TypeTag::Boolean | TypeTag::Money
        )
    }
}

/// Every declared type name the classifier recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    BigInt,
    Binary,
    Bit,
    Char,
    Date,
    DateTime,
    DateTime2,
    DateTimeOffset,
    Decimal,
    Float,
    Image,
    Int,
    Money,
    NChar,
    NText,
    NVarChar,
    Real,
    SmallDateTime,
    SmallInt,
    SmallMoney,
    Structured,
    Text,
    Time,
    Timestamp,
    TinyInt,
    Udt,
    UniqueIdentifier,
    VarBinary,
    VarChar,
    Variant,
    Xml,
}

// Sorted by name so lookups can binary search.
const TYPE_NAMES: &[(&str, SqlType)] = &[
    ("bigint", SqlType::BigInt),
    ("binary", SqlType::Binary),
    ("bit", SqlType::Bit),
    ("char", SqlType::Char),
    ("date", SqlType::Date),
    ("datetime", SqlType::DateTime),
    ("datetime2", SqlType::DateTime2),
    ("datetimeoffset", SqlType::DateTimeOffset),
    ("decimal", SqlType::Decimal),
    ("float", SqlType::Float),
    ("image", SqlType::Image),
    ("int", SqlType::Int),
    ("money", SqlType::Money),
    ("nchar", SqlType::NChar),
    ("ntext", SqlType::NText),
    ("nvarchar", SqlType::NVarChar),
    ("real", SqlType::Real),
    ("smalldatetime", SqlType::SmallDateTime),
    ("smallint", SqlType::SmallInt),
    ("smallmoney", SqlType::SmallMoney),
    ("structured", SqlType::Structured),
    ("text", SqlType::Text),
    ("time", SqlType::Time),
    ("timestamp", SqlType::Timestamp),
    ("tinyint", SqlType::TinyInt),
    ("udt", SqlType::Udt),
    ("uniqueidentifier", SqlType::UniqueIdentifier),
    ("varbinary", SqlType::VarBinary),
    ("varchar", SqlType::VarChar),
    ("variant", SqlType::Variant),
    ("xml", SqlType::Xml),
];

impl SqlType {
    /// Lowercase name as shown in the generated inline comments.
    pub fn name(self) -> &'static str {
        TYPE_NAMES
            .iter()
            .find(|(_, t)| *t == self)
            .map(|(name, _)| *name)
            .unwrap_or("other")
    }

    pub fn tag(self) -> TypeTag {
        use SqlType::*;
        match self {
            BigInt | Int | SmallInt | TinyInt => TypeTag::Integer,
            Decimal | Float | Real => TypeTag::Decimal,
            Bit => TypeTag::Boolean,
            Money | SmallMoney => TypeTag::Money,
            Char | NChar | VarChar | NVarChar | Text | NText | Xml => TypeTag::String,
            DateTime | DateTime2 | SmallDateTime | DateTimeOffset | Time => TypeTag::Temporal,
            Date => TypeTag::DateOnly,
            UniqueIdentifier => TypeTag::Guid,
            Binary | VarBinary | Image | Timestamp | Variant | Udt | Structured => TypeTag::Other,
        }
    }
}

/// Look up a declared type name (case-insensitive, surrounding whitespace ignored).
pub fn classify(declared: &str) -> Result<SqlType> {
    let key = declared.trim().to_lowercase();
    TYPE_NAMES
        .binary_search_by(|(name, _)| (*name).cmp(key.as_str()))
        .map(|idx| TYPE_NAMES[idx].1)
        .map_err(|_| Error::UnknownType {
            type_name: declared.to_string(),
        })
}

/// Whether `literal` must be wrapped in quotes for a column tagged `tag`.
/// The bare `null` keyword is never quoted.
pub fn requires_quoting(tag: TypeTag, literal: &str) -> bool {
    !tag.is_unquoted() && literal != "null"
}
