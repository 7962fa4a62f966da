// 型ディスパッチャー
//
// カラムの生の型記述子をフィールド記述子へ変換します。
// 各カラムは独立して処理され、結果は記述子またはエラーのいずれか一方です。
// 内部に可変状態を持たないため、呼び出し側で並列に処理しても構いません。

use crate::core::column::{ColumnDescriptor, RawType};
use crate::core::config::Dialect;
use crate::core::error::MappingError;
use crate::core::field::{FieldDescriptor, FieldKind, Placeholder, SchemaTypes, ValueCodec};
use crate::core::numeric::NumericRangeResolver;
use crate::core::serial::SerialFieldResolver;
use tracing::debug;
use uuid::Uuid;

/// テーブル単位のマッピング結果
///
/// フィールド記述子は入力カラムの順序を保持し、変換できなかった
/// カラムのエラーはすべて収集されます。
#[derive(Debug, Clone, PartialEq)]
pub struct TableMapping {
    /// テーブル名
    pub table: String,
    /// 変換できたフィールド
    pub fields: Vec<FieldDescriptor>,
    /// 変換できなかったカラムのエラー
    pub errors: Vec<MappingError>,
}

impl TableMapping {
    /// すべてのカラムが変換できたかどうか
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 型ディスパッチャー
#[derive(Debug, Clone, Copy)]
pub struct TypeDispatcher {
    dialect: Dialect,
    numeric: NumericRangeResolver,
    serial: SerialFieldResolver,
}

impl TypeDispatcher {
    /// 新しいTypeDispatcherを作成
    ///
    /// # Arguments
    ///
    /// * `dialect` - カラム情報の取得元の方言
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            numeric: NumericRangeResolver::new(),
            serial: SerialFieldResolver::new(),
        }
    }

    /// 取得元の方言
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// カラムをフィールド記述子に変換
    ///
    /// # Returns
    ///
    /// 変換されたフィールド記述子（カラム属性適用済み）、
    /// 変換できない場合はカラム名を含むエラー
    pub fn dispatch(&self, column: &ColumnDescriptor) -> Result<FieldDescriptor, MappingError> {
        let name = column.name.as_str();

        let mut field = match &column.raw_type {
            RawType::Binary => FieldDescriptor::new(name, FieldKind::Bytes),
            RawType::Bool => FieldDescriptor::new(name, FieldKind::Bool),
            RawType::Decimal => FieldDescriptor::new(name, FieldKind::Float64),
            RawType::Enum { values } => FieldDescriptor::new(
                name,
                FieldKind::Enum {
                    values: values.clone(),
                },
            ),
            RawType::Float(subtype) => {
                FieldDescriptor::new(name, self.numeric.resolve_float(subtype))
            }
            RawType::Integer(subtype) => match self.numeric.resolve_integer(subtype) {
                Some(kind) => FieldDescriptor::new(name, kind),
                None => {
                    debug!(column = name, raw_type = subtype.label(), "Unknown integer subtype");
                    return Err(MappingError::UnsupportedColumnType {
                        column: name.to_string(),
                        raw_type: subtype.label().to_string(),
                    });
                }
            },
            RawType::Json => FieldDescriptor::new(name, FieldKind::Json)
                .with_placeholder(Placeholder::EmptyJson),
            RawType::String => FieldDescriptor::new(name, FieldKind::String),
            RawType::Time => FieldDescriptor::new(name, FieldKind::Time),
            RawType::Serial {
                subtype,
                native_type,
            } => self
                .serial
                .resolve(name, *subtype, native_type, self.dialect),
            RawType::Uuid => FieldDescriptor::new(name, FieldKind::Uuid)
                .with_placeholder(Placeholder::Uuid(Uuid::new_v4())),
            RawType::Array {
                element,
                native_type,
            } => self.dispatch_array(name, element, native_type)?,
            RawType::Unsupported(label) => {
                debug!(column = name, raw_type = %label, "Unsupported column type");
                return Err(MappingError::UnsupportedColumnType {
                    column: name.to_string(),
                    raw_type: label.clone(),
                });
            }
        };

        field.apply_attributes(&column.attributes);
        Ok(field)
    }

    /// テーブルのカラムをまとめて変換
    ///
    /// 最初のエラーで中断せず、すべてのカラムを処理します。
    pub fn dispatch_table(&self, table: &str, columns: &[ColumnDescriptor]) -> TableMapping {
        let mut fields = Vec::with_capacity(columns.len());
        let mut errors = Vec::new();

        for column in columns {
            match self.dispatch(column) {
                Ok(field) => fields.push(field),
                Err(error) => errors.push(error),
            }
        }

        debug!(
            table = table,
            fields = fields.len(),
            errors = errors.len(),
            "Dispatched table columns"
        );

        TableMapping {
            table: table.to_string(),
            fields,
            errors,
        }
    }

    /// 配列カラムを変換
    ///
    /// 文字列要素のみサポートし、配列リテラルコーデックに紐付けます。
    /// 全方言にスキーマ型オーバーライドを付与します。
    fn dispatch_array(
        &self,
        name: &str,
        element: &RawType,
        native_type: &str,
    ) -> Result<FieldDescriptor, MappingError> {
        match element {
            RawType::String => {
                let schema_type: SchemaTypes = Dialect::ALL
                    .iter()
                    .map(|dialect| {
                        let sql_type = if *dialect == self.dialect {
                            native_type.to_string()
                        } else {
                            dialect.array_fallback_type().to_string()
                        };
                        (*dialect, sql_type)
                    })
                    .collect();

                Ok(FieldDescriptor::new(
                    name,
                    FieldKind::Other {
                        codec: ValueCodec::StringArray,
                    },
                )
                .with_schema_types(schema_type))
            }
            other => {
                debug!(
                    column = name,
                    element_type = other.kind_name(),
                    "Unsupported array element type"
                );
                Err(MappingError::UnsupportedArrayElementType {
                    column: name.to_string(),
                    element_type: other.kind_name().to_string(),
                })
            }
        }
    }
}
