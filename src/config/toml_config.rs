use crate::core::suite::validate_suite;
use crate::domain::model::SymbolCheck;
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::{validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML 檢查清單
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub server: Option<String>,
    #[serde(default)]
    pub checks: Vec<SymbolCheck>,
}

impl SuiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SYMBOL_HOST})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        // 常數 pattern，不會失敗
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for SuiteConfig {
    fn validate(&self) -> Result<()> {
        if let Some(server) = &self.server {
            validate_url("server", server)?;
        }

        if self.checks.is_empty() {
            return Err(SmokeError::InvalidConfigValue {
                field: "checks".to_string(),
                value: String::new(),
                reason: "Suite must contain at least one check".to_string(),
            });
        }

        validate_suite(&self.checks)
    }
}
