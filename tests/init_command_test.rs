/// initコマンドハンドラーのテスト
///
/// プロジェクト初期化機能が正しく動作することを確認します。

#[cfg(test)]
mod init_command_tests {
    use std::fs;
    use strata_import::cli::commands::init::{InitCommand, InitCommandHandler};
    use strata_import::core::config::{Config, Dialect};
    use strata_import::services::config_loader::ConfigLoader;
    use tempfile::TempDir;

    fn command(temp_dir: &TempDir, dialect: Dialect, force: bool) -> InitCommand {
        InitCommand {
            project_path: temp_dir.path().to_path_buf(),
            config_path: None,
            dialect,
            force,
        }
    }

    /// 各方言での初期化
    #[test]
    fn test_init_each_dialect() {
        for dialect in Dialect::ALL {
            let temp_dir = TempDir::new().unwrap();
            let path = InitCommandHandler::new()
                .execute(&command(&temp_dir, dialect, false))
                .unwrap();

            assert_eq!(path, temp_dir.path().join(Config::DEFAULT_CONFIG_PATH));
            assert!(temp_dir.path().join("schema").is_dir());

            let config = ConfigLoader::from_file(&path).unwrap();
            assert_eq!(config.dialect, dialect);
            assert!(config.validate().is_ok());
        }
    }

    /// 初期化済みプロジェクトは--forceなしでは上書きしない
    #[test]
    fn test_init_keeps_existing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(Config::DEFAULT_CONFIG_PATH);
        fs::write(&config_path, "custom").unwrap();

        let result = InitCommandHandler::new().execute(&command(&temp_dir, Dialect::SQLite, false));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "custom");
    }

    /// --forceで上書き
    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(Config::DEFAULT_CONFIG_PATH);
        fs::write(&config_path, "custom").unwrap();

        InitCommandHandler::new()
            .execute(&command(&temp_dir, Dialect::SQLite, true))
            .unwrap();

        let config = ConfigLoader::from_file(&config_path).unwrap();
        assert_eq!(config.dialect, Dialect::SQLite);
    }
}
