use crate::error::SchemaModelError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::HashMap, fmt};

/// Tag assigned to a column at schema-declaration time.
///
/// Columns outside the closed set (user-defined domains, extension types)
/// carry their raw type name in `Custom`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SqlType {
    Serial,
    SmallSerial,
    BigSerial,
    Integer,
    SmallInt,
    BigInt,
    Numeric,
    Real,
    DoublePrecision,
    Text,
    VarChar,
    Enum,
    Boolean,
    Time,
    Timestamp,
    Date,
    Json,
    Jsonb,
    Interval,
    Uuid,
    Custom(String),
}

lazy_static! {
    static ref POSTGRES_TYPE_MAP: HashMap<&'static str, SqlType> = build_postgres_type_map();
}

impl SqlType {
    /// Resolves a Postgres type name (canonical or alias, any case) to its tag.
    pub fn from_postgres_name(type_name: &str) -> Result<Self, SchemaModelError> {
        let normalized = Self::normalize_type_name(type_name);
        POSTGRES_TYPE_MAP
            .get(normalized.as_str())
            .cloned()
            .ok_or_else(|| SchemaModelError::UnrecognizedColumnType(type_name.to_string()))
    }

    pub fn postgres_name(&self) -> Cow<'_, str> {
        match self {
            SqlType::Serial => Cow::Borrowed("SERIAL"),
            SqlType::SmallSerial => Cow::Borrowed("SMALLSERIAL"),
            SqlType::BigSerial => Cow::Borrowed("BIGSERIAL"),
            SqlType::Integer => Cow::Borrowed("INTEGER"),
            SqlType::SmallInt => Cow::Borrowed("SMALLINT"),
            SqlType::BigInt => Cow::Borrowed("BIGINT"),
            SqlType::Numeric => Cow::Borrowed("NUMERIC"),
            SqlType::Real => Cow::Borrowed("REAL"),
            SqlType::DoublePrecision => Cow::Borrowed("DOUBLE PRECISION"),
            SqlType::Text => Cow::Borrowed("TEXT"),
            SqlType::VarChar => Cow::Borrowed("VARCHAR"),
            SqlType::Enum => Cow::Borrowed("ENUM"),
            SqlType::Boolean => Cow::Borrowed("BOOLEAN"),
            SqlType::Time => Cow::Borrowed("TIME"),
            SqlType::Timestamp => Cow::Borrowed("TIMESTAMP"),
            SqlType::Date => Cow::Borrowed("DATE"),
            SqlType::Json => Cow::Borrowed("JSON"),
            SqlType::Jsonb => Cow::Borrowed("JSONB"),
            SqlType::Interval => Cow::Borrowed("INTERVAL"),
            SqlType::Uuid => Cow::Borrowed("UUID"),
            SqlType::Custom(name) => Cow::Borrowed(name),
        }
    }

    fn normalize_type_name(type_name: &str) -> String {
        type_name.trim().to_uppercase()
    }
}

impl TryFrom<&str> for SqlType {
    type Error = SchemaModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        SqlType::from_postgres_name(s)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.postgres_name())
    }
}

fn build_postgres_type_map() -> HashMap<&'static str, SqlType> {
    use SqlType::*;

    let entries = [
        ("SERIAL", Serial),
        ("SERIAL4", Serial),
        ("SMALLSERIAL", SmallSerial),
        ("SERIAL2", SmallSerial),
        ("BIGSERIAL", BigSerial),
        ("SERIAL8", BigSerial),
        ("INTEGER", Integer),
        ("INT", Integer),
        ("INT4", Integer),
        ("SMALLINT", SmallInt),
        ("INT2", SmallInt),
        ("BIGINT", BigInt),
        ("INT8", BigInt),
        ("NUMERIC", Numeric),
        ("DECIMAL", Numeric),
        ("REAL", Real),
        ("FLOAT4", Real),
        ("DOUBLE PRECISION", DoublePrecision),
        ("FLOAT8", DoublePrecision),
        ("TEXT", Text),
        ("VARCHAR", VarChar),
        ("CHARACTER VARYING", VarChar),
        ("ENUM", Enum),
        ("BOOLEAN", Boolean),
        ("BOOL", Boolean),
        ("TIME", Time),
        ("TIME WITHOUT TIME ZONE", Time),
        ("TIME WITH TIME ZONE", Time),
        ("TIMETZ", Time),
        ("TIMESTAMP", Timestamp),
        ("TIMESTAMP WITHOUT TIME ZONE", Timestamp),
        ("TIMESTAMP WITH TIME ZONE", Timestamp),
        ("TIMESTAMPTZ", Timestamp),
        ("DATE", Date),
        ("JSON", Json),
        ("JSONB", Jsonb),
        ("INTERVAL", Interval),
        ("UUID", Uuid),
    ];

    let mut map = HashMap::new();
    for (name, sql_type) in entries {
        map.insert(name, sql_type);
    }
    map
}
