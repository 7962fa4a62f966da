// エンティティ組み立てサービス
//
// テーブル単位のマッピング結果から、出力用のエンティティドキュメントを組み立てます。

use crate::core::config::{Dialect, UnmappedColumnPolicy};
use crate::core::dispatcher::TableMapping;
use crate::core::error::{ImportError, MappingError};
use crate::core::field::FieldDescriptor;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

/// エンティティドキュメントのフォーマットバージョン
pub const DOCUMENT_VERSION: &str = "1.0";

/// エンティティドキュメント
#[derive(Debug, Clone, Serialize)]
pub struct EntityDocument {
    /// フォーマットバージョン
    pub version: String,
    /// エンティティ名（テーブル名のPascalCase）
    pub entity: String,
    /// 元のテーブル名
    pub table: String,
    /// 取得元の方言
    pub dialect: Dialect,
    /// 生成日時
    pub generated_at: DateTime<Utc>,
    /// フィールド定義（カラム順）
    pub fields: Vec<FieldDescriptor>,
}

/// 組み立て結果
#[derive(Debug, Clone)]
pub struct AssembledEntity {
    pub document: EntityDocument,
    /// スキップしたカラムのエラー（skipポリシー時のみ）
    pub skipped: Vec<MappingError>,
}

/// エンティティ組み立てサービス
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityAssembler {
    policy: UnmappedColumnPolicy,
}

impl EntityAssembler {
    /// 新しいEntityAssemblerを作成
    pub fn new(policy: UnmappedColumnPolicy) -> Self {
        Self { policy }
    }

    /// 現在時刻でエンティティを組み立てる
    pub fn assemble(
        &self,
        mapping: &TableMapping,
        dialect: Dialect,
    ) -> Result<AssembledEntity, ImportError> {
        self.assemble_at(mapping, dialect, Utc::now())
    }

    /// 指定時刻でエンティティを組み立てる
    ///
    /// failポリシーでは変換できないカラムが1つでもあればエラーを返します。
    pub fn assemble_at(
        &self,
        mapping: &TableMapping,
        dialect: Dialect,
        generated_at: DateTime<Utc>,
    ) -> Result<AssembledEntity, ImportError> {
        if !mapping.is_complete() && self.policy == UnmappedColumnPolicy::Fail {
            return Err(ImportError::UnmappedColumns {
                table: mapping.table.clone(),
                errors: mapping.errors.clone(),
            });
        }

        for error in &mapping.errors {
            warn!(table = %mapping.table, "Skipping column: {}", error);
        }

        debug!(
            table = %mapping.table,
            fields = mapping.fields.len(),
            "Assembled entity"
        );

        Ok(AssembledEntity {
            document: EntityDocument {
                version: DOCUMENT_VERSION.to_string(),
                entity: to_pascal_case(&mapping.table),
                table: mapping.table.clone(),
                dialect,
                generated_at,
                fields: mapping.fields.clone(),
            },
            skipped: mapping.errors.clone(),
        })
    }
}

/// テーブル名をPascalCaseに変換（例: user_accounts -> UserAccounts）
pub fn to_pascal_case(table: &str) -> String {
    table
        .split(|c: char| c == '_' || c == '-' || c == ' ' || c == '.')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldKind;

    fn mapping(errors: Vec<MappingError>) -> TableMapping {
        TableMapping {
            table: "user_accounts".to_string(),
            fields: vec![FieldDescriptor::new("id", FieldKind::Int)],
            errors,
        }
    }

    fn unsupported(column: &str) -> MappingError {
        MappingError::UnsupportedColumnType {
            column: column.to_string(),
            raw_type: "point".to_string(),
        }
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user_accounts"), "UserAccounts");
        assert_eq!(to_pascal_case("users"), "Users");
        assert_eq!(to_pascal_case("order-items"), "OrderItems");
        assert_eq!(to_pascal_case("__meta__"), "Meta");
    }

    #[test]
    fn test_assemble_complete_mapping() {
        let assembled = EntityAssembler::new(UnmappedColumnPolicy::Fail)
            .assemble(&mapping(Vec::new()), Dialect::PostgreSQL)
            .unwrap();

        assert_eq!(assembled.document.entity, "UserAccounts");
        assert_eq!(assembled.document.table, "user_accounts");
        assert_eq!(assembled.document.version, DOCUMENT_VERSION);
        assert_eq!(assembled.document.fields.len(), 1);
        assert!(assembled.skipped.is_empty());
    }

    #[test]
    fn test_fail_policy_lists_every_column() {
        let err = EntityAssembler::new(UnmappedColumnPolicy::Fail)
            .assemble(
                &mapping(vec![unsupported("location"), unsupported("area")]),
                Dialect::PostgreSQL,
            )
            .unwrap_err();

        assert!(err.is_unmapped_columns());
        let message = err.to_string();
        assert!(message.contains("user_accounts"));
        assert!(message.contains("location"));
        assert!(message.contains("area"));
    }

    #[test]
    fn test_skip_policy_returns_skipped_errors() {
        let assembled = EntityAssembler::new(UnmappedColumnPolicy::Skip)
            .assemble(&mapping(vec![unsupported("location")]), Dialect::MySQL)
            .unwrap();

        assert_eq!(assembled.document.fields.len(), 1);
        assert_eq!(assembled.skipped.len(), 1);
        assert_eq!(assembled.skipped[0].column(), Some("location"));
    }
}
