use anyhow::{Context, Result};
use clap::Parser;
use colored::control as color_control;
use std::env;
use std::path::PathBuf;
use std::process;
use strata_import::cli::commands::import::{ImportCommand, ImportCommandHandler};
use strata_import::cli::commands::init::{InitCommand, InitCommandHandler};
use strata_import::cli::{Cli, Commands};
use strata_import::core::config::Dialect;
use tracing_subscriber::EnvFilter;

fn main() {
    sqlx::any::install_default_drivers();

    // CLIをパースして実行
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // 非同期ランタイムを作成して実行
    let runtime = tokio::runtime::Runtime::new()
        .context("Failed to create Tokio runtime")
        .unwrap_or_else(|e| {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        });

    let result = runtime.block_on(run_command(cli));

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// トレーシングを初期化する
///
/// RUST_LOG が設定されていればそれに従い、なければ --verbose で debug に引き上げる。
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("strata_import={}", default_level)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("Warning: Failed to set up logging: {}", e);
    }
}

/// コマンドを実行する
async fn run_command(cli: Cli) -> Result<String> {
    // --no-color フラグの処理
    if cli.no_color {
        color_control::set_override(false);
    }

    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    // --config フラグの処理（絶対パスに変換）
    let config_path: Option<PathBuf> = cli.config.map(|p| {
        if p.is_absolute() {
            p
        } else {
            project_path.join(p)
        }
    });

    match cli.command {
        Commands::Init { dialect, force } => {
            let dialect = parse_dialect(&dialect)?;
            let handler = InitCommandHandler::new();
            let command = InitCommand {
                project_path,
                config_path,
                dialect,
                force,
            };
            let path = handler.execute(&command)?;
            Ok(format!("Project initialized: {:?}", path))
        }

        Commands::Import {
            env,
            output,
            tables,
            exclude_tables,
            force,
            dry_run,
        } => {
            let handler = ImportCommandHandler::new();
            let command = ImportCommand {
                project_path,
                config_path,
                env,
                output_dir: output,
                tables,
                exclude_tables,
                force,
                dry_run,
                format: cli.format,
            };
            handler.execute(&command).await
        }
    }
}

/// Dialect文字列をDialect型に変換する
fn parse_dialect(dialect: &str) -> Result<Dialect> {
    dialect.parse()
}
