// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// 出力フォーマット
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

/// Strata Import - Database Schema Import CLI
///
/// Reads column definitions from an existing database and writes
/// dialect-neutral entity schema files.
#[derive(Parser, Debug)]
#[command(name = "strata-import")]
#[command(author = "Strata Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Import database column definitions as entity schema files")]
#[command(long_about = "Strata Import - Database Schema Import CLI

Reads table and column definitions from an existing database and converts
them into dialect-neutral entity schema files (YAML).

Columns whose types cannot be represented are reported with the column
name and the database type. Arrays of strings are mapped to a portable
`{a,b,c}` representation with per-dialect storage types.

Supported databases: PostgreSQL, MySQL, SQLite")]
#[command(propagate_version = true)]
#[command(after_help = "GETTING STARTED:
  1. Initialize a new project:     strata-import init --dialect postgresql
  2. Edit the connection settings: .strata-import.yaml
  3. Preview the entity schemas:   strata-import import --dry-run
  4. Write the entity schemas:     strata-import import

For detailed help on each command, use: strata-import <command> --help")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format (text or json)
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new import project
    ///
    /// Creates the configuration file and the output directory.
    Init {
        /// Database dialect (postgresql, mysql, sqlite)
        #[arg(short, long, value_name = "DIALECT")]
        dialect: String,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Import column definitions from the database
    ///
    /// Connects to the database of the selected environment and writes
    /// one entity schema file per table.
    Import {
        /// Target environment
        #[arg(short, long, value_name = "ENV", default_value = "development")]
        env: String,

        /// Output directory (defaults to output_dir in the config file)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Only import these tables (comma separated)
        #[arg(long, value_name = "TABLES", value_delimiter = ',')]
        tables: Vec<String>,

        /// Skip these tables (comma separated)
        #[arg(long, value_name = "TABLES", value_delimiter = ',')]
        exclude_tables: Vec<String>,

        /// Overwrite existing schema files
        #[arg(long)]
        force: bool,

        /// Print the schema files instead of writing them
        #[arg(long)]
        dry_run: bool,
    },
}
