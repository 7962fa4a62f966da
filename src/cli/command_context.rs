// コマンド共通コンテキスト
//
// 設定ファイル読み込みやパス解決の重複をCLI層で集約する。

use crate::core::config::Config;
use crate::services::config_loader::ConfigLoader;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_path: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// 設定ファイルを読み込んでコンテキストを作成
    ///
    /// `config_path` が省略された場合はプロジェクトルートの既定ファイルを使用します。
    pub fn load(project_path: PathBuf, config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = Self::resolve_config_path(&project_path, config_path);
        if !config_path.exists() {
            return Err(anyhow!(
                "Config file not found: {:?}. Please initialize the project first with the `init` command.",
                config_path
            ));
        }

        let config =
            ConfigLoader::from_file(&config_path).with_context(|| "Failed to read config file")?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", config_path))?;

        Ok(Self {
            project_path,
            config_path,
            config,
        })
    }

    /// 設定ファイルのパスを解決
    pub fn resolve_config_path(project_path: &Path, config_path: Option<PathBuf>) -> PathBuf {
        config_path.unwrap_or_else(|| project_path.join(Config::DEFAULT_CONFIG_PATH))
    }

    /// 出力ディレクトリの絶対パス
    ///
    /// CLIで指定された場合はそちらを優先します。
    pub fn output_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        let dir = override_dir.unwrap_or(&self.config.output_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.project_path.join(dir)
        }
    }
}
