// importコマンドハンドラー
//
// データベースからカラム定義を取り込み、エンティティスキーマを出力します。
// - 環境別の接続設定でデータベースに接続
// - テーブルごとにカラムをフィールド記述子へ変換
// - YAMLファイルへの書き出し、またはdry-run時の標準出力表示

use crate::adapters::database::DatabaseConnectionService;
use crate::adapters::database_introspector::create_introspector;
use crate::cli::command_context::CommandContext;
use crate::cli::OutputFormat;
use crate::core::config::UnmappedColumnPolicy;
use crate::services::entity_assembler::{AssembledEntity, EntityAssembler};
use crate::services::entity_writer::EntityWriter;
use crate::services::schema_importer::{ImportReport, SchemaImporter};
use crate::services::table_filter::TableSelection;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// importコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ImportCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルパス
    pub config_path: Option<PathBuf>,
    /// 環境名
    pub env: String,
    /// 出力先ディレクトリ（省略時は設定ファイルの output_dir）
    pub output_dir: Option<PathBuf>,
    /// 取り込むテーブル
    pub tables: Vec<String>,
    /// 除外するテーブル
    pub exclude_tables: Vec<String>,
    /// 既存ファイルを上書き
    pub force: bool,
    /// ファイルを書き出さずに表示のみ
    pub dry_run: bool,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// JSON出力用の取り込みサマリー
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub output_dir: PathBuf,
    pub tables: Vec<WrittenTable>,
    pub skipped_columns: Vec<SkippedColumn>,
    pub missing_tables: Vec<String>,
}

/// 書き出したテーブル
#[derive(Debug, Clone, Serialize)]
pub struct WrittenTable {
    pub table: String,
    pub path: PathBuf,
    pub fields: usize,
}

/// スキップしたカラム
#[derive(Debug, Clone, Serialize)]
pub struct SkippedColumn {
    pub table: String,
    pub column: Option<String>,
    pub reason: String,
}

/// importコマンドハンドラー
#[derive(Debug, Clone)]
pub struct ImportCommandHandler {}

impl ImportCommandHandler {
    /// 新しいImportCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// importコマンドを実行
    ///
    /// # Returns
    ///
    /// 成功時は取り込み結果のサマリー（dry-run時はYAML）、失敗時はエラーメッセージ
    pub async fn execute(&self, command: &ImportCommand) -> Result<String> {
        let context =
            CommandContext::load(command.project_path.clone(), command.config_path.clone())?;
        let config = &context.config;

        let db_config = config
            .get_database_config(&command.env)
            .with_context(|| format!("Config for environment '{}' not found", command.env))?;

        let db_service = DatabaseConnectionService::new();
        let pool = db_service
            .create_pool(config.dialect, &db_config)
            .await
            .with_context(|| "Failed to connect to database")?;

        let importer = SchemaImporter::new(
            config.dialect,
            create_introspector(config.dialect, pool.clone()),
        );
        let selection =
            TableSelection::from_config(config, &command.tables, &command.exclude_tables);

        let report = importer.import(&selection).await;
        db_service.close_pool(pool).await;
        let report = report.with_context(|| "Failed to import schema from database")?;

        let writer = EntityWriter::new(
            context.output_dir(command.output_dir.as_deref()),
            command.force,
        );

        self.emit(
            &report,
            config.on_unmapped_column,
            &writer,
            command.dry_run,
            command.format,
        )
    }

    /// 取り込み結果を出力
    ///
    /// すべてのテーブルを組み立て、出力先を検査してから書き出すため、
    /// failポリシーでの失敗や既存ファイルとの衝突ではファイルを1つも書き出しません。
    pub fn emit(
        &self,
        report: &ImportReport,
        policy: UnmappedColumnPolicy,
        writer: &EntityWriter,
        dry_run: bool,
        format: OutputFormat,
    ) -> Result<String> {
        let assembler = EntityAssembler::new(policy);
        let entities = report
            .tables
            .iter()
            .map(|mapping| assembler.assemble(mapping, report.dialect))
            .collect::<Result<Vec<AssembledEntity>, _>>()?;

        let skipped_columns: Vec<SkippedColumn> = entities
            .iter()
            .flat_map(|entity| {
                entity.skipped.iter().map(|error| SkippedColumn {
                    table: entity.document.table.clone(),
                    column: error.column().map(str::to_string),
                    reason: error.to_string(),
                })
            })
            .collect();

        if dry_run {
            return match format {
                OutputFormat::Json => {
                    let documents: Vec<_> = entities.iter().map(|e| &e.document).collect();
                    serde_json::to_string_pretty(&documents)
                        .with_context(|| "Failed to serialize entities to JSON")
                }
                OutputFormat::Text => {
                    let documents = entities
                        .iter()
                        .map(|entity| writer.render(&entity.document))
                        .collect::<Result<Vec<String>>>()?;
                    let mut output = documents.join("---\n");
                    output.push_str(
                        &self.format_warnings(&skipped_columns, &report.missing_tables),
                    );
                    Ok(output.trim_end().to_string())
                }
            };
        }

        // 書き出し前に全ファイルを検査し、途中までの書き出しを防ぐ
        writer.check_all(entities.iter().map(|entity| &entity.document))?;

        let mut tables = Vec::with_capacity(entities.len());
        for entity in &entities {
            let path = writer.write(&entity.document)?;
            tables.push(WrittenTable {
                table: entity.document.table.clone(),
                path,
                fields: entity.document.fields.len(),
            });
        }

        let summary = ImportSummary {
            output_dir: writer.output_dir().to_path_buf(),
            tables,
            skipped_columns,
            missing_tables: report.missing_tables.clone(),
        };

        match format {
            OutputFormat::Json => serde_json::to_string_pretty(&summary)
                .with_context(|| "Failed to serialize import summary to JSON"),
            OutputFormat::Text => Ok(self.format_summary(&summary)),
        }
    }

    /// サマリーを整形
    fn format_summary(&self, summary: &ImportSummary) -> String {
        let mut output = format!(
            "{} {} table(s) into {:?}\n",
            "Imported".green().bold(),
            summary.tables.len(),
            summary.output_dir
        );

        for table in &summary.tables {
            let file_name = table
                .path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            output.push_str(&format!("  {} ({} fields)\n", file_name, table.fields));
        }

        output.push_str(
            &self.format_warnings(&summary.skipped_columns, &summary.missing_tables),
        );

        output.trim_end().to_string()
    }

    /// スキップしたカラムと見つからなかったテーブルの警告を整形
    fn format_warnings(
        &self,
        skipped_columns: &[SkippedColumn],
        missing_tables: &[String],
    ) -> String {
        let mut output = String::new();

        for skipped in skipped_columns {
            output.push_str(&format!(
                "{} {}: skipped column: {}\n",
                "Warning:".yellow().bold(),
                skipped.table,
                skipped.reason
            ));
        }

        for table in missing_tables {
            output.push_str(&format!(
                "{} table '{}' was not found in the database\n",
                "Warning:".yellow().bold(),
                table
            ));
        }

        output
    }
}

impl Default for ImportCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
