// コマンドハンドラー層
// 各CLIコマンドの実装

pub mod import;
pub mod init;
