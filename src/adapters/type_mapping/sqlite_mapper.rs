// SQLite用型パーサー
//
// 宣言された型名を大文字小文字を区別せずに解釈します。
// `VARCHAR(255)` のような型パラメータは無視します。

use super::{ColumnTypeParser, TypeMetadata};
use crate::adapters::database_introspector::RawColumnInfo;
use crate::core::column::{FloatSubtype, IntegerSubtype, RawType};

/// SQLite用型パーサー
pub struct SqliteTypeParser;

impl ColumnTypeParser for SqliteTypeParser {
    fn parse_column_type(&self, column: &RawColumnInfo, _metadata: &TypeMetadata) -> RawType {
        let declared = column.data_type.trim();
        let base = declared
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match base.as_str() {
            "smallint" | "int2" => RawType::Integer(IntegerSubtype::Int2),
            "int" | "int4" | "mediumint" => RawType::Integer(IntegerSubtype::Int4),
            "integer" | "bigint" | "int8" => RawType::Integer(IntegerSubtype::Int8),
            "bool" | "boolean" => RawType::Bool,
            "real" | "double" | "double precision" | "float" => {
                RawType::Float(FloatSubtype::Double)
            }
            "numeric" | "decimal" => RawType::Decimal,
            "text" | "clob" => RawType::String,
            t if t.starts_with("char")
                || t.starts_with("varchar")
                || t.starts_with("nchar")
                || t.starts_with("nvarchar") =>
            {
                RawType::String
            }
            "" | "blob" => RawType::Binary,
            "json" => RawType::Json,
            "date" | "datetime" | "timestamp" | "time" => RawType::Time,
            "uuid" => RawType::Uuid,
            _ => RawType::Unsupported(declared.to_string()),
        }
    }
}
