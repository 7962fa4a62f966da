// エラー型定義
//
// アプリケーション全体で使用されるカスタムエラー型を提供します。
// thiserrorを使用して、MappingError, DatabaseError, ImportError を定義します。

use std::path::PathBuf;
use thiserror::Error;

/// 型マッピングエラー
///
/// カラムの型をフィールド記述子に変換できなかった場合、
/// または配列リテラルの形式が不正な場合に発生します。
/// いずれもリトライで解決しないため、呼び出し元へそのまま伝搬します。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Unsupported column type
    #[error("unsupported type {raw_type:?} for column {column}")]
    UnsupportedColumnType {
        /// カラム名
        column: String,
        /// 元の型ラベル
        raw_type: String,
    },

    /// Unsupported array element type
    #[error("unsupported array item type {element_type:?} for column {column}")]
    UnsupportedArrayElementType {
        /// カラム名
        column: String,
        /// 配列要素の型
        element_type: String,
    },

    /// Malformed array literal
    #[error("unexpected array format {raw:?}")]
    MalformedArrayLiteral {
        /// 不正なリテラル
        raw: String,
    },
}

impl MappingError {
    /// 非対応カラム型エラーかどうか
    pub fn is_unsupported_column_type(&self) -> bool {
        matches!(self, MappingError::UnsupportedColumnType { .. })
    }

    /// 非対応配列要素型エラーかどうか
    pub fn is_unsupported_array_element_type(&self) -> bool {
        matches!(self, MappingError::UnsupportedArrayElementType { .. })
    }

    /// 配列リテラル形式エラーかどうか
    pub fn is_malformed_array_literal(&self) -> bool {
        matches!(self, MappingError::MalformedArrayLiteral { .. })
    }

    /// 対象カラム名を取得
    pub fn column(&self) -> Option<&str> {
        match self {
            MappingError::UnsupportedColumnType { column, .. }
            | MappingError::UnsupportedArrayElementType { column, .. } => Some(column),
            MappingError::MalformedArrayLiteral { .. } => None,
        }
    }
}

/// データベースエラー
///
/// データベース操作時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connection error
    #[error("Database connection error: {message} (cause: {cause})")]
    Connection {
        /// エラーメッセージ
        message: String,
        /// エラー原因
        cause: String,
    },

    /// Query execution error
    #[error("Query execution error: {message}")]
    Query {
        /// エラーメッセージ
        message: String,
        /// 失敗したSQL
        sql: Option<String>,
    },
}

impl DatabaseError {
    /// 接続エラーかどうか
    pub fn is_connection(&self) -> bool {
        matches!(self, DatabaseError::Connection { .. })
    }

    /// クエリエラーかどうか
    pub fn is_query(&self) -> bool {
        matches!(self, DatabaseError::Query { .. })
    }
}

/// インポートエラー
///
/// エンティティスキーマの組み立て・出力時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum ImportError {
    /// Table has columns that could not be mapped
    #[error("table '{table}' has {} unmapped column(s): {}", .errors.len(), format_errors(.errors))]
    UnmappedColumns {
        /// テーブル名
        table: String,
        /// カラムごとのエラー
        errors: Vec<MappingError>,
    },

    /// Output file already exists
    #[error("Schema file already exists: {path:?}. Use --force to overwrite.")]
    OutputExists {
        /// 出力先パス
        path: PathBuf,
    },

    /// Table name cannot be used as a file name
    #[error("table name '{table}' cannot be used as a schema file name")]
    InvalidTableName {
        /// テーブル名
        table: String,
    },
}

impl ImportError {
    /// 未変換カラムエラーかどうか
    pub fn is_unmapped_columns(&self) -> bool {
        matches!(self, ImportError::UnmappedColumns { .. })
    }

    /// 出力先既存エラーかどうか
    pub fn is_output_exists(&self) -> bool {
        matches!(self, ImportError::OutputExists { .. })
    }

    /// ファイル名に使えないテーブル名エラーかどうか
    pub fn is_invalid_table_name(&self) -> bool {
        matches!(self, ImportError::InvalidTableName { .. })
    }
}

/// エラー一覧をフォーマットするヘルパー関数
fn format_errors(errors: &[MappingError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
