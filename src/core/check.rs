use crate::domain::model::{CheckMethod, CheckOutcome, SymbolCheck};
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::validate_url;
use reqwest::{Client, Response, StatusCode};
use std::time::Instant;
use url::Url;

pub const DEFAULT_SERVER: &str = "http://symbols.mozilla.org/";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// 解析並驗證符號伺服器的基底 URL
pub fn parse_server(server: &str) -> Result<Url> {
    validate_url("server", server)?;
    Url::parse(server).map_err(|e| SmokeError::InvalidConfigValue {
        field: "server".to_string(),
        value: server.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })
}

/// 以 RFC 3986 規則將相對路徑接到基底 URL 上
pub fn resolve_url(base: &Url, path: &str) -> Result<Url> {
    base.join(path).map_err(|source| SmokeError::InvalidUrl {
        base: base.to_string(),
        path: path.to_string(),
        source,
    })
}

/// 取出第一行並去掉行尾的 ASCII 空白（非 ASCII 空白保留）
pub fn first_line(body: &[u8]) -> String {
    let mut line = match body.iter().position(|b| *b == b'\n') {
        Some(end) => &body[..end],
        None => body,
    };
    while let Some((last, rest)) = line.split_last() {
        if !matches!(*last, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c) {
            break;
        }
        line = rest;
    }
    String::from_utf8_lossy(line).into_owned()
}

/// 只讀取回應內容直到第一個換行
async fn read_first_line(mut response: Response) -> Result<String> {
    let mut buffer = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if let Some(end) = chunk.iter().position(|b| *b == b'\n') {
            buffer.extend_from_slice(&chunk[..end]);
            return Ok(first_line(&buffer));
        }
        buffer.extend_from_slice(&chunk);
    }
    Ok(first_line(&buffer))
}

pub struct SymbolClient {
    client: Client,
    base: Url,
}

impl SymbolClient {
    pub fn new(base: Url) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(base, client))
    }

    pub fn with_client(base: Url, client: Client) -> Self {
        Self { client, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn resolve(&self, path: &str) -> Result<Url> {
        resolve_url(&self.base, path)
    }

    /// 執行單一檢查：狀態碼必須是 200，若有預期第一行則需完全相同
    pub async fn check(&self, check: &SymbolCheck) -> Result<CheckOutcome> {
        let url = self.resolve(&check.path)?;
        let method = check.method();

        tracing::debug!("{} {}", method, url);
        let started = Instant::now();

        let request = match method {
            CheckMethod::Head => self.client.head(url.clone()),
            CheckMethod::Get => self.client.get(url.clone()),
        };
        let response = request.send().await?;
        let status = response.status();

        tracing::debug!("Response status for {}: {}", check.name, status);

        if status != StatusCode::OK {
            return Err(SmokeError::StatusMismatch {
                url: url.to_string(),
                expected: StatusCode::OK.as_u16(),
                actual: status.as_u16(),
            });
        }

        let observed = match &check.first_line {
            Some(expected) => {
                let actual = read_first_line(response).await?;
                if actual != *expected {
                    return Err(SmokeError::FirstLineMismatch {
                        url: url.to_string(),
                        expected: expected.clone(),
                        actual,
                    });
                }
                Some(actual)
            }
            None => None,
        };

        Ok(CheckOutcome {
            url: url.to_string(),
            method,
            status: status.as_u16(),
            first_line: observed,
            elapsed: started.elapsed(),
        })
    }
}
