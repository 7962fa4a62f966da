// PostgreSQL用型パーサー

use super::{ColumnTypeParser, TypeMetadata};
use crate::adapters::database_introspector::RawColumnInfo;
use crate::core::column::{FloatSubtype, IntegerSubtype, RawType, SerialSubtype};

/// PostgreSQL用型パーサー
pub struct PostgresTypeParser;

impl ColumnTypeParser for PostgresTypeParser {
    fn parse_column_type(&self, column: &RawColumnInfo, metadata: &TypeMetadata) -> RawType {
        let data_type = column.data_type.to_lowercase();

        match data_type.as_str() {
            "array" => parse_array(column),
            "user-defined" => column
                .udt_name
                .as_ref()
                .and_then(|udt| metadata.enums.get(udt))
                .map(|values| RawType::Enum {
                    values: values.clone(),
                })
                .unwrap_or_else(|| RawType::Unsupported(unsupported_label(column))),
            name => match parse_type_name(name) {
                Some(RawType::Integer(subtype)) if has_sequence_default(column) => {
                    serial_for(&subtype)
                        .map(|(subtype, native_type)| RawType::Serial {
                            subtype,
                            native_type: native_type.to_string(),
                        })
                        .unwrap_or(RawType::Integer(subtype))
                }
                Some(raw_type) => raw_type,
                None => RawType::Unsupported(column.data_type.clone()),
            },
        }
    }
}

/// 型名（正式名または内部名）をパース
fn parse_type_name(name: &str) -> Option<RawType> {
    let raw_type = match name {
        "smallint" | "int2" => RawType::Integer(IntegerSubtype::Int2),
        "integer" | "int" | "int4" => RawType::Integer(IntegerSubtype::Int4),
        "bigint" | "int8" => RawType::Integer(IntegerSubtype::Int8),
        "real" | "float4" => RawType::Float(FloatSubtype::Single),
        "double precision" | "float8" => RawType::Float(FloatSubtype::Double),
        "numeric" | "decimal" => RawType::Decimal,
        "boolean" | "bool" => RawType::Bool,
        "bytea" => RawType::Binary,
        "json" | "jsonb" => RawType::Json,
        "text" | "character varying" | "varchar" | "character" | "char" | "bpchar" => {
            RawType::String
        }
        "uuid" => RawType::Uuid,
        "date" | "interval" => RawType::Time,
        t if t.starts_with("time") => RawType::Time,
        _ => return None,
    };
    Some(raw_type)
}

/// 配列型をパース
///
/// 要素型は udt_name（例: `_text`）の先頭の `_` を除いた名前から求める。
fn parse_array(column: &RawColumnInfo) -> RawType {
    let Some(element_name) = column
        .udt_name
        .as_deref()
        .and_then(|udt| udt.strip_prefix('_'))
    else {
        return RawType::Unsupported(unsupported_label(column));
    };

    let element = parse_type_name(element_name)
        .unwrap_or_else(|| RawType::Unsupported(element_name.to_string()));

    RawType::Array {
        element: Box::new(element),
        native_type: format!("{}[]", element_name),
    }
}

/// シーケンス由来のデフォルト値を持つかどうか
fn has_sequence_default(column: &RawColumnInfo) -> bool {
    column
        .default_value
        .as_deref()
        .is_some_and(|default| default.trim_start().starts_with("nextval("))
}

/// 整数幅に対応するSERIAL型
fn serial_for(subtype: &IntegerSubtype) -> Option<(SerialSubtype, &'static str)> {
    match subtype {
        IntegerSubtype::Int2 => Some((SerialSubtype::Small, "smallserial")),
        IntegerSubtype::Int4 => Some((SerialSubtype::Regular, "serial")),
        IntegerSubtype::Int8 => Some((SerialSubtype::Big, "bigserial")),
        IntegerSubtype::Other(_) => None,
    }
}

/// エラー表示用の型ラベル
fn unsupported_label(column: &RawColumnInfo) -> String {
    column
        .udt_name
        .clone()
        .unwrap_or_else(|| column.data_type.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn column(data_type: &str, udt_name: Option<&str>) -> RawColumnInfo {
        RawColumnInfo {
            name: "col".to_string(),
            data_type: data_type.to_string(),
            udt_name: udt_name.map(str::to_string),
            ..Default::default()
        }
    }

    fn parse(column: &RawColumnInfo) -> RawType {
        PostgresTypeParser.parse_column_type(column, &TypeMetadata::default())
    }

    #[test]
    fn test_postgres_integers() {
        assert_eq!(
            parse(&column("smallint", Some("int2"))),
            RawType::Integer(IntegerSubtype::Int2)
        );
        assert_eq!(
            parse(&column("integer", Some("int4"))),
            RawType::Integer(IntegerSubtype::Int4)
        );
        assert_eq!(
            parse(&column("bigint", Some("int8"))),
            RawType::Integer(IntegerSubtype::Int8)
        );
    }

    #[test]
    fn test_postgres_serial_detection() {
        let mut col = column("bigint", Some("int8"));
        col.default_value = Some("nextval('orders_id_seq'::regclass)".to_string());

        assert_eq!(
            parse(&col),
            RawType::Serial {
                subtype: SerialSubtype::Big,
                native_type: "bigserial".to_string(),
            }
        );
    }

    #[test]
    fn test_postgres_scalar_types() {
        assert_eq!(
            parse(&column("real", None)),
            RawType::Float(FloatSubtype::Single)
        );
        assert_eq!(
            parse(&column("double precision", None)),
            RawType::Float(FloatSubtype::Double)
        );
        assert_eq!(parse(&column("numeric", None)), RawType::Decimal);
        assert_eq!(parse(&column("boolean", None)), RawType::Bool);
        assert_eq!(parse(&column("bytea", None)), RawType::Binary);
        assert_eq!(parse(&column("jsonb", None)), RawType::Json);
        assert_eq!(parse(&column("character varying", None)), RawType::String);
        assert_eq!(parse(&column("uuid", None)), RawType::Uuid);
        assert_eq!(
            parse(&column("timestamp with time zone", None)),
            RawType::Time
        );
        assert_eq!(parse(&column("date", None)), RawType::Time);
    }

    #[test]
    fn test_postgres_text_array() {
        assert_eq!(
            parse(&column("ARRAY", Some("_text"))),
            RawType::string_array("text[]")
        );
    }

    #[test]
    fn test_postgres_integer_array() {
        assert_eq!(
            parse(&column("ARRAY", Some("_int4"))),
            RawType::Array {
                element: Box::new(RawType::Integer(IntegerSubtype::Int4)),
                native_type: "int4[]".to_string(),
            }
        );
    }

    #[test]
    fn test_postgres_enum() {
        let mut enums = HashMap::new();
        enums.insert(
            "mood".to_string(),
            vec!["sad".to_string(), "ok".to_string(), "happy".to_string()],
        );
        let metadata = TypeMetadata::with_enums(enums);

        let raw_type =
            PostgresTypeParser.parse_column_type(&column("USER-DEFINED", Some("mood")), &metadata);

        assert_eq!(
            raw_type,
            RawType::Enum {
                values: vec!["sad".to_string(), "ok".to_string(), "happy".to_string()],
            }
        );
    }

    #[test]
    fn test_postgres_unknown_user_defined_type() {
        assert_eq!(
            parse(&column("USER-DEFINED", Some("geometry"))),
            RawType::Unsupported("geometry".to_string())
        );
    }

    #[test]
    fn test_postgres_unsupported() {
        assert_eq!(
            parse(&column("point", Some("point"))),
            RawType::Unsupported("point".to_string())
        );
    }
}
