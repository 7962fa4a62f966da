// initコマンドハンドラー
//
// プロジェクトの初期化処理を実装します。
// - 出力ディレクトリの作成（schema/）
// - デフォルト設定ファイルの生成（.strata-import.yaml）
// - 初期化済みプロジェクトの検出

use crate::core::config::{Config, Dialect};
use crate::services::config_serializer::ConfigSerializer;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// initコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct InitCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルパス（省略時はプロジェクトルートの既定ファイル）
    pub config_path: Option<PathBuf>,
    /// データベース方言
    pub dialect: Dialect,
    /// 強制的に初期化（既存の設定を上書き）
    pub force: bool,
}

/// initコマンドハンドラー
#[derive(Debug, Clone)]
pub struct InitCommandHandler {}

impl InitCommandHandler {
    /// 新しいInitCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// initコマンドを実行
    ///
    /// # Returns
    ///
    /// 成功時は作成した設定ファイルのパス
    pub fn execute(&self, command: &InitCommand) -> Result<PathBuf> {
        let config_path = command
            .config_path
            .clone()
            .unwrap_or_else(|| command.project_path.join(Config::DEFAULT_CONFIG_PATH));

        // 初期化済みチェック
        if config_path.exists() && !command.force {
            return Err(anyhow!(
                "Project is already initialized. Use --force option to force re-initialization."
            ));
        }

        let config = ConfigSerializer::default_config(command.dialect);

        // 出力ディレクトリを作成
        self.create_output_dir(&command.project_path.join(&config.output_dir))?;

        // 設定ファイルを生成
        let yaml = ConfigSerializer::to_yaml(&config)?;
        fs::write(&config_path, yaml)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(config_path)
    }

    /// 出力ディレクトリを作成
    fn create_output_dir(&self, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", output_dir))
    }
}

impl Default for InitCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
