#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::check::DEFAULT_SERVER;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// 伺服器優先順序：命令列 > 檢查清單檔 > 預設
pub fn effective_server<'a>(cli_server: Option<&'a str>, suite_server: Option<&'a str>) -> &'a str {
    cli_server.or(suite_server).unwrap_or(DEFAULT_SERVER)
}
