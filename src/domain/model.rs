use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 一筆符號查詢請求：相對路徑加上（可選的）預期第一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCheck {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub first_line: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SymbolCheck {
    /// 只檢查狀態碼（HEAD）
    pub fn status_only(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            first_line: None,
            description: None,
        }
    }

    /// 檢查狀態碼與回應內容的第一行（GET）
    pub fn with_first_line(
        name: impl Into<String>,
        path: impl Into<String>,
        first_line: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            first_line: Some(first_line.into()),
            description: None,
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn method(&self) -> CheckMethod {
        if self.first_line.is_some() {
            CheckMethod::Get
        } else {
            CheckMethod::Head
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckMethod {
    Head,
    Get,
}

impl CheckMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckMethod::Head => "HEAD",
            CheckMethod::Get => "GET",
        }
    }
}

impl std::fmt::Display for CheckMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 通過的檢查結果
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub url: String,
    pub method: CheckMethod,
    pub status: u16,
    pub first_line: Option<String>,
    #[serde(with = "duration_ms")]
    pub elapsed: Duration,
}

pub(crate) mod duration_ms {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }
}
