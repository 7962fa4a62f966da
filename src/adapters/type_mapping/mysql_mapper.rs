// MySQL用型パーサー

use super::{ColumnTypeParser, TypeMetadata};
use crate::adapters::database_introspector::RawColumnInfo;
use crate::core::column::{FloatSubtype, IntegerSubtype, RawType, SerialSubtype};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// `enum(...)` 内の引用符で囲まれた値（`''` はエスケープされた引用符）
static ENUM_VALUE_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"'((?:[^']|'')*)'"));

/// MySQL用型パーサー
pub struct MySqlTypeParser;

impl ColumnTypeParser for MySqlTypeParser {
    fn parse_column_type(&self, column: &RawColumnInfo, _metadata: &TypeMetadata) -> RawType {
        let data_type = column.data_type.to_lowercase();
        let column_type = column
            .column_type
            .as_deref()
            .unwrap_or(&column.data_type)
            .to_lowercase();

        let raw_type = match data_type.as_str() {
            "tinyint" if column_type.starts_with("tinyint(1)") => RawType::Bool,
            "bool" | "boolean" => RawType::Bool,
            "tinyint" | "smallint" => RawType::Integer(IntegerSubtype::Int2),
            "mediumint" | "int" | "integer" => RawType::Integer(IntegerSubtype::Int4),
            "bigint" => RawType::Integer(IntegerSubtype::Int8),
            "float" => RawType::Float(FloatSubtype::Single),
            "double" | "real" => RawType::Float(FloatSubtype::Double),
            "decimal" | "numeric" => RawType::Decimal,
            "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" => {
                RawType::String
            }
            "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => {
                RawType::Binary
            }
            "json" => RawType::Json,
            "date" | "datetime" | "timestamp" | "time" | "year" => RawType::Time,
            "enum" => RawType::Enum {
                values: parse_enum_values(&column_type_original(column)),
            },
            _ => RawType::Unsupported(column_type_original(column)),
        };

        match raw_type {
            RawType::Integer(subtype) if is_auto_increment(column) => {
                serial_subtype(&subtype)
                    .map(|serial| RawType::Serial {
                        subtype: serial,
                        native_type: column_type_original(column),
                    })
                    .unwrap_or(RawType::Integer(subtype))
            }
            other => other,
        }
    }
}

/// 完全な型定義（大文字小文字はそのまま）
fn column_type_original(column: &RawColumnInfo) -> String {
    column
        .column_type
        .clone()
        .unwrap_or_else(|| column.data_type.clone())
}

/// `enum('a','b')` から値を定義順に抽出
fn parse_enum_values(column_type: &str) -> Vec<String> {
    let pattern = match ENUM_VALUE_PATTERN.as_ref() {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!(column_type, error = %e, "Failed to compile enum value pattern");
            return Vec::new();
        }
    };

    pattern
        .captures_iter(column_type)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().replace("''", "'"))
        .collect()
}

/// auto_increment 指定があるかどうか
fn is_auto_increment(column: &RawColumnInfo) -> bool {
    column
        .extra
        .as_deref()
        .is_some_and(|extra| extra.to_lowercase().contains("auto_increment"))
}

/// 整数幅に対応する自動増分サブタイプ
fn serial_subtype(subtype: &IntegerSubtype) -> Option<SerialSubtype> {
    match subtype {
        IntegerSubtype::Int2 => Some(SerialSubtype::Small),
        IntegerSubtype::Int4 => Some(SerialSubtype::Regular),
        IntegerSubtype::Int8 => Some(SerialSubtype::Big),
        IntegerSubtype::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(data_type: &str, column_type: &str) -> RawColumnInfo {
        RawColumnInfo {
            name: "col".to_string(),
            data_type: data_type.to_string(),
            column_type: Some(column_type.to_string()),
            ..Default::default()
        }
    }

    fn parse(column: &RawColumnInfo) -> RawType {
        MySqlTypeParser.parse_column_type(column, &TypeMetadata::default())
    }

    #[test]
    fn test_mysql_tinyint_bool() {
        assert_eq!(parse(&column("tinyint", "tinyint(1)")), RawType::Bool);
        assert_eq!(
            parse(&column("tinyint", "tinyint(4)")),
            RawType::Integer(IntegerSubtype::Int2)
        );
    }

    #[test]
    fn test_mysql_integer_widths() {
        assert_eq!(
            parse(&column("smallint", "smallint(6)")),
            RawType::Integer(IntegerSubtype::Int2)
        );
        assert_eq!(
            parse(&column("mediumint", "mediumint(9)")),
            RawType::Integer(IntegerSubtype::Int4)
        );
        assert_eq!(
            parse(&column("int", "int(11)")),
            RawType::Integer(IntegerSubtype::Int4)
        );
        assert_eq!(
            parse(&column("bigint", "bigint(20)")),
            RawType::Integer(IntegerSubtype::Int8)
        );
    }

    #[test]
    fn test_mysql_auto_increment() {
        let mut col = column("int", "int unsigned");
        col.extra = Some("auto_increment".to_string());

        assert_eq!(
            parse(&col),
            RawType::Serial {
                subtype: SerialSubtype::Regular,
                native_type: "int unsigned".to_string(),
            }
        );
    }

    #[test]
    fn test_mysql_floats() {
        assert_eq!(
            parse(&column("float", "float")),
            RawType::Float(FloatSubtype::Single)
        );
        assert_eq!(
            parse(&column("double", "double")),
            RawType::Float(FloatSubtype::Double)
        );
        assert_eq!(parse(&column("decimal", "decimal(10,2)")), RawType::Decimal);
    }

    #[test]
    fn test_mysql_string_and_binary_families() {
        assert_eq!(parse(&column("varchar", "varchar(255)")), RawType::String);
        assert_eq!(parse(&column("longtext", "longtext")), RawType::String);
        assert_eq!(parse(&column("varbinary", "varbinary(16)")), RawType::Binary);
        assert_eq!(parse(&column("mediumblob", "mediumblob")), RawType::Binary);
        assert_eq!(parse(&column("json", "json")), RawType::Json);
        assert_eq!(parse(&column("datetime", "datetime")), RawType::Time);
        assert_eq!(parse(&column("year", "year")), RawType::Time);
    }

    #[test]
    fn test_mysql_enum_values() {
        assert_eq!(
            parse(&column("enum", "enum('draft','it''s live','archived')")),
            RawType::Enum {
                values: vec![
                    "draft".to_string(),
                    "it's live".to_string(),
                    "archived".to_string()
                ],
            }
        );
    }

    #[test]
    fn test_enum_value_pattern_compiles() {
        assert!(ENUM_VALUE_PATTERN.is_ok());
        assert_eq!(
            parse_enum_values("enum('a','')"),
            vec!["a".to_string(), String::new()]
        );
    }

    #[test]
    fn test_mysql_unsupported_keeps_column_type() {
        assert_eq!(
            parse(&column("set", "set('a','b')")),
            RawType::Unsupported("set('a','b')".to_string())
        );
        assert_eq!(
            parse(&column("geometry", "geometry")),
            RawType::Unsupported("geometry".to_string())
        );
    }
}
