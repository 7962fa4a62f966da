// 型マッピングサービス
//
// イントロスペクションで取得した方言固有の型文字列を、
// 方言に依存しない生の型記述子（RawType）へ変換します。

mod mysql_mapper;
mod postgres_mapper;
mod sqlite_mapper;

pub use mysql_mapper::MySqlTypeParser;
pub use postgres_mapper::PostgresTypeParser;
pub use sqlite_mapper::SqliteTypeParser;

use crate::adapters::database_introspector::RawColumnInfo;
use crate::core::column::{ColumnAttributes, ColumnDescriptor, RawType};
use crate::core::config::Dialect;
use std::collections::HashMap;

/// 型メタデータ
///
/// カラム単体からは判別できない型の追加情報を保持します。
#[derive(Debug, Clone, Default)]
pub struct TypeMetadata {
    /// 既知のENUM型（PostgreSQL用、型名 -> 値リスト）
    pub enums: HashMap<String, Vec<String>>,
}

impl TypeMetadata {
    /// ENUM定義からメタデータを作成
    pub fn with_enums(enums: HashMap<String, Vec<String>>) -> Self {
        Self { enums }
    }
}

/// 方言固有の型パーサー
pub trait ColumnTypeParser: Send + Sync {
    /// カラム情報から生の型記述子へパース
    ///
    /// # Arguments
    /// * `column` - データベースから取得したカラム情報
    /// * `metadata` - 追加メタデータ
    ///
    /// # Returns
    /// 生の型記述子。認識できない型は `RawType::Unsupported` として返す
    fn parse_column_type(&self, column: &RawColumnInfo, metadata: &TypeMetadata) -> RawType;
}

/// 型マッピングサービス
pub struct TypeMappingService {
    dialect: Dialect,
    parser: Box<dyn ColumnTypeParser>,
}

impl Clone for TypeMappingService {
    fn clone(&self) -> Self {
        Self::new(self.dialect)
    }
}

impl std::fmt::Debug for TypeMappingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeMappingService")
            .field("dialect", &self.dialect)
            .finish()
    }
}

impl TypeMappingService {
    /// 新しいTypeMappingServiceを作成
    pub fn new(dialect: Dialect) -> Self {
        let parser: Box<dyn ColumnTypeParser> = match dialect {
            Dialect::PostgreSQL => Box::new(PostgresTypeParser),
            Dialect::MySQL => Box::new(MySqlTypeParser),
            Dialect::SQLite => Box::new(SqliteTypeParser),
        };
        Self { dialect, parser }
    }

    /// 方言を取得
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// RawColumnInfo -> ColumnDescriptor
    ///
    /// NULL許可・デフォルト値・コメントは属性としてそのまま引き継ぎます。
    /// 自動増分カラムのシーケンス由来のデフォルト値は引き継ぎません。
    pub fn to_column_descriptor(
        &self,
        column: &RawColumnInfo,
        metadata: &TypeMetadata,
    ) -> ColumnDescriptor {
        let raw_type = self.parser.parse_column_type(column, metadata);

        let default = match raw_type {
            RawType::Serial { .. } => None,
            _ => column.default_value.clone(),
        };

        ColumnDescriptor {
            name: column.name.clone(),
            raw_type,
            attributes: ColumnAttributes {
                nullable: column.is_nullable,
                default,
                comment: column.comment.clone(),
            },
        }
    }
}
