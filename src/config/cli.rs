use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "symbol-smoke")]
#[command(about = "Smoke tests for a symbol server")]
#[command(override_usage = "symbol-smoke [SERVER_URL] [OPTIONS] [PATTERNS]...")]
pub struct CliConfig {
    /// Base URL of the symbol server, taken from a leading `http...` argument
    #[arg(skip)]
    pub server: Option<String>,

    /// Only run checks whose name contains one of these patterns
    pub patterns: Vec<String>,

    /// Match patterns against the full check name
    #[arg(long)]
    pub exact: bool,

    /// List the selected checks without running them
    #[arg(long)]
    pub list: bool,

    /// Stop after the first failing check
    #[arg(short, long)]
    pub failfast: bool,

    /// Load checks from a TOML suite file instead of the built-in suite
    #[arg(long)]
    pub suite: Option<PathBuf>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// 第一個參數若以 `http` 開頭，就當成伺服器網址取出，其餘參數交給 clap
pub fn split_server_arg<I>(args: I) -> (Option<String>, Vec<String>)
where
    I: IntoIterator<Item = String>,
{
    let mut args: Vec<String> = args.into_iter().collect();
    let server = if args.len() > 1 && args[1].starts_with("http") {
        Some(args.remove(1))
    } else {
        None
    };
    (server, args)
}

impl CliConfig {
    pub fn from_args<I>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = String>,
    {
        let (server, rest) = split_server_arg(args);
        let mut config = Self::try_parse_from(rest)?;
        config.server = server;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(server) = &self.server {
            validate_url("server", server)?;
        }
        Ok(())
    }
}
