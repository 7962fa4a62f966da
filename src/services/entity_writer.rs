// エンティティ書き出しサービス
//
// エンティティドキュメントをYAMLに変換し、出力ディレクトリへ書き出します。

use crate::core::error::ImportError;
use crate::core::naming::SCHEMA_FILE_EXTENSION;
use crate::services::entity_assembler::EntityDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// エンティティ書き出しサービス
#[derive(Debug, Clone)]
pub struct EntityWriter {
    output_dir: PathBuf,
    force: bool,
}

impl EntityWriter {
    /// 新しいEntityWriterを作成
    ///
    /// # Arguments
    ///
    /// * `output_dir` - 出力ディレクトリ
    /// * `force` - 既存ファイルを上書きするかどうか
    pub fn new(output_dir: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            force,
        }
    }

    /// 出力ディレクトリ
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// ドキュメントの出力先パス
    ///
    /// テーブル名は出力ディレクトリ直下の1つのファイル名にならなければなりません。
    pub fn path_for(&self, document: &EntityDocument) -> Result<PathBuf, ImportError> {
        if !is_plain_file_stem(&document.table) {
            return Err(ImportError::InvalidTableName {
                table: document.table.clone(),
            });
        }

        Ok(self
            .output_dir
            .join(format!("{}.{}", document.table, SCHEMA_FILE_EXTENSION)))
    }

    /// すべてのドキュメントが書き出し可能か確認
    ///
    /// 1ファイルも書き出す前に、不正なテーブル名と既存ファイルを検出します。
    pub fn check_all<'a>(
        &self,
        documents: impl IntoIterator<Item = &'a EntityDocument>,
    ) -> Result<Vec<PathBuf>, ImportError> {
        documents
            .into_iter()
            .map(|document| {
                let path = self.path_for(document)?;
                if path.exists() && !self.force {
                    return Err(ImportError::OutputExists { path });
                }
                Ok(path)
            })
            .collect()
    }

    /// ドキュメントをYAML文字列に変換
    pub fn render(&self, document: &EntityDocument) -> Result<String> {
        serde_saphyr::to_string(document)
            .with_context(|| format!("Failed to serialize entity for table '{}'", document.table))
    }

    /// ドキュメントをファイルに書き出す
    ///
    /// # Returns
    ///
    /// 書き出したファイルのパス
    pub fn write(&self, document: &EntityDocument) -> Result<PathBuf> {
        let path = self.path_for(document)?;

        if path.exists() && !self.force {
            return Err(ImportError::OutputExists { path }.into());
        }

        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory: {:?}", self.output_dir)
        })?;

        let yaml = self.render(document)?;
        fs::write(&path, yaml).with_context(|| format!("Failed to write file: {:?}", path))?;

        debug!(path = ?path, "Wrote entity schema");
        Ok(path)
    }
}

/// 区切り文字や `.` / `..` を含まない単一のパス要素かどうか
fn is_plain_file_stem(table: &str) -> bool {
    if table.contains(['/', '\\']) {
        return false;
    }

    let mut components = Path::new(table).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
