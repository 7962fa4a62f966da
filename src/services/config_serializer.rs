// 設定ファイル書き出しサービス
//
// core::config の純粋性を保つため、YAMLへの直列化はこのサービスに集約する。

use crate::core::config::{Config, DatabaseConfig, Dialect, UnmappedColumnPolicy};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// 設定ファイル書き出しサービス
#[derive(Debug, Clone, Default)]
pub struct ConfigSerializer;

impl ConfigSerializer {
    /// ConfigをYAML文字列に変換
    pub fn to_yaml(config: &Config) -> Result<String> {
        serde_saphyr::to_string(config).with_context(|| "Failed to serialize config file")
    }

    /// 方言に応じたデフォルト設定を作成
    pub fn default_config(dialect: Dialect) -> Config {
        let database = match dialect {
            Dialect::SQLite => "database.db".to_string(),
            _ => "app_development".to_string(),
        };

        let mut environments = HashMap::new();
        environments.insert(
            "development".to_string(),
            DatabaseConfig {
                host: "localhost".to_string(),
                port: dialect.default_port(),
                database,
                user: None,
                password: None,
                timeout: None,
            },
        );

        Config {
            version: "1.0".to_string(),
            dialect,
            output_dir: PathBuf::from(crate::core::naming::OUTPUT_DIR),
            tables: Vec::new(),
            exclude_tables: Vec::new(),
            on_unmapped_column: UnmappedColumnPolicy::Fail,
            environments,
        }
    }
}
