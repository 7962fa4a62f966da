// スキーマ取り込みサービス
//
// データベースからテーブル定義を取得し、カラムごとにフィールド記述子へ変換します。
// 変換できないカラムはエラーとして収集し、処理は中断しません。

use crate::adapters::database_introspector::{enum_map, DatabaseIntrospector};
use crate::adapters::type_mapping::{TypeMappingService, TypeMetadata};
use crate::core::column::ColumnDescriptor;
use crate::core::config::Dialect;
use crate::core::dispatcher::{TableMapping, TypeDispatcher};
use crate::services::table_filter::TableSelection;
use anyhow::{Context, Result};
use tracing::debug;

/// 取り込み結果
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// 取得元の方言
    pub dialect: Dialect,
    /// テーブルごとのマッピング結果（イントロスペクション順）
    pub tables: Vec<TableMapping>,
    /// 包含リストにあるが存在しないテーブル
    pub missing_tables: Vec<String>,
}

impl ImportReport {
    /// 変換できなかったカラムの総数
    pub fn error_count(&self) -> usize {
        self.tables.iter().map(|t| t.errors.len()).sum()
    }
}

/// スキーマ取り込みサービス
pub struct SchemaImporter {
    introspector: Box<dyn DatabaseIntrospector>,
    type_mapping: TypeMappingService,
    dispatcher: TypeDispatcher,
}

impl SchemaImporter {
    /// 新しいSchemaImporterを作成
    pub fn new(dialect: Dialect, introspector: Box<dyn DatabaseIntrospector>) -> Self {
        Self {
            introspector,
            type_mapping: TypeMappingService::new(dialect),
            dispatcher: TypeDispatcher::new(dialect),
        }
    }

    /// スキーマを取り込む
    ///
    /// # Arguments
    ///
    /// * `selection` - 取り込み対象のテーブル選択条件
    pub async fn import(&self, selection: &TableSelection) -> Result<ImportReport> {
        let enums = self
            .introspector
            .get_enums()
            .await
            .with_context(|| "Failed to get enum definitions")?;
        let metadata = TypeMetadata::with_enums(enum_map(enums));

        let all_tables = self
            .introspector
            .get_table_names()
            .await
            .with_context(|| "Failed to get table names")?;
        let selected = selection.select(&all_tables);

        debug!(
            available = all_tables.len(),
            selected = selected.tables.len(),
            "Selected tables for import"
        );

        let mut tables = Vec::with_capacity(selected.tables.len());
        for table_name in &selected.tables {
            let raw_columns = self
                .introspector
                .get_columns(table_name)
                .await
                .with_context(|| format!("Failed to get columns for table '{}'", table_name))?;

            let columns: Vec<ColumnDescriptor> = raw_columns
                .iter()
                .map(|column| self.type_mapping.to_column_descriptor(column, &metadata))
                .collect();

            tables.push(self.dispatcher.dispatch_table(table_name, &columns));
        }

        Ok(ImportReport {
            dialect: self.dispatcher.dialect(),
            tables,
            missing_tables: selected.missing,
        })
    }
}
