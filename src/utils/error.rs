use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url}: expected status {expected}, got {actual}")]
    StatusMismatch {
        url: String,
        expected: u16,
        actual: u16,
    },

    #[error("{url}: first line mismatch: expected {expected:?}, got {actual:?}")]
    FirstLineMismatch {
        url: String,
        expected: String,
        actual: String,
    },

    #[error("Cannot resolve '{path}' against '{base}': {source}")]
    InvalidUrl {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate check name: {name}")]
    DuplicateCheck { name: String },

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 失敗分類，用於報告與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// 狀態碼或第一行不符
    Assertion,
    /// 無法連線、DNS 失敗、回應格式錯誤
    Transport,
    /// 參數或設定檔錯誤，在發出任何請求前就會中止
    Configuration,
}

impl SmokeError {
    pub fn category(&self) -> FailureCategory {
        match self {
            SmokeError::StatusMismatch { .. } | SmokeError::FirstLineMismatch { .. } => {
                FailureCategory::Assertion
            }
            SmokeError::Transport(_) => FailureCategory::Transport,
            SmokeError::InvalidUrl { .. }
            | SmokeError::InvalidConfigValue { .. }
            | SmokeError::DuplicateCheck { .. }
            | SmokeError::TomlParse(_)
            | SmokeError::Io(_)
            | SmokeError::Serialization(_) => FailureCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            FailureCategory::Assertion => {
                "Check the symbol server deployment and its rewrite rules"
            }
            FailureCategory::Transport => {
                "Make sure the server URL is reachable from this machine"
            }
            FailureCategory::Configuration => {
                "Fix the command line arguments or the suite file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;
