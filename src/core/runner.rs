use crate::core::check::SymbolClient;
use crate::core::suite::validate_suite;
use crate::domain::model::{duration_ms, CheckMethod, CheckOutcome, SymbolCheck};
use crate::utils::error::{FailureCategory, Result, SmokeError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};

/// 依名稱挑選要執行的檢查
#[derive(Debug, Clone, Default)]
pub struct Selection {
    patterns: Vec<String>,
    exact: bool,
}

impl Selection {
    pub fn new(patterns: Vec<String>, exact: bool) -> Self {
        Self { patterns, exact }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, name: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        self.patterns.iter().any(|pattern| {
            if self.exact {
                pattern == name
            } else {
                name.contains(pattern.as_str())
            }
        })
    }

    pub fn apply<'a>(&self, checks: &'a [SymbolCheck]) -> Vec<&'a SymbolCheck> {
        checks.iter().filter(|c| self.matches(&c.name)).collect()
    }
}

/// 單一檢查的執行結果
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub method: CheckMethod,
    pub url: Option<String>,
    #[serde(with = "duration_ms")]
    pub duration: Duration,
    pub passed: bool,
    pub outcome: Option<CheckOutcome>,
    pub message: Option<String>,
    pub category: Option<FailureCategory>,
}

impl CheckReport {
    fn passed(check: &SymbolCheck, outcome: CheckOutcome, duration: Duration) -> Self {
        Self {
            name: check.name.clone(),
            method: outcome.method,
            url: Some(outcome.url.clone()),
            duration,
            passed: true,
            outcome: Some(outcome),
            message: None,
            category: None,
        }
    }

    fn failed(check: &SymbolCheck, url: Option<String>, error: &SmokeError, duration: Duration) -> Self {
        Self {
            name: check.name.clone(),
            method: check.method(),
            url,
            duration,
            passed: false,
            outcome: None,
            message: Some(error.to_string()),
            category: Some(error.category()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub server: String,
    pub started_at: DateTime<Utc>,
    pub selected: usize,
    pub executed: usize,
    pub passed: usize,
    pub failed: usize,
    #[serde(with = "duration_ms")]
    pub total_duration: Duration,
    pub failed_checks: Vec<String>,
}

impl RunSummary {
    pub fn from_reports(
        server: &str,
        started_at: DateTime<Utc>,
        selected: usize,
        reports: &[CheckReport],
        total_duration: Duration,
    ) -> Self {
        let failed_checks: Vec<String> = reports
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.name.clone())
            .collect();

        Self {
            server: server.to_string(),
            started_at,
            selected,
            executed: reports.len(),
            passed: reports.len() - failed_checks.len(),
            failed: failed_checks.len(),
            total_duration,
            failed_checks,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub summary: RunSummary,
    pub reports: Vec<CheckReport>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.summary.is_success()
    }
}

/// 依序執行檢查，一次只送出一個請求
pub struct SuiteRunner {
    client: SymbolClient,
    selection: Selection,
    failfast: bool,
}

impl SuiteRunner {
    pub fn new(client: SymbolClient) -> Self {
        Self {
            client,
            selection: Selection::all(),
            failfast: false,
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_failfast(mut self, failfast: bool) -> Self {
        self.failfast = failfast;
        self
    }

    /// 設定錯誤（名稱重複等）會在送出任何請求前回傳 Err
    pub async fn run(&self, checks: &[SymbolCheck]) -> Result<RunReport> {
        validate_suite(checks)?;

        let selected = self.selection.apply(checks);
        let server = self.client.base().to_string();
        let started_at = Utc::now();
        let run_start = Instant::now();

        tracing::info!("🚀 Running {} of {} checks against {}", selected.len(), checks.len(), server);

        let mut reports = Vec::with_capacity(selected.len());
        for check in &selected {
            let report = self.run_one(check).await;
            let failed = !report.passed;
            reports.push(report);

            if failed && self.failfast {
                tracing::warn!("⏹️ Stopping after first failure ({})", check.name);
                break;
            }
        }

        let summary = RunSummary::from_reports(
            &server,
            started_at,
            selected.len(),
            &reports,
            run_start.elapsed(),
        );

        if summary.is_success() {
            tracing::info!(
                "✅ {} passed in {:?}",
                summary.passed,
                summary.total_duration
            );
        } else {
            tracing::error!(
                "❌ {} failed, {} passed: {}",
                summary.failed,
                summary.passed,
                summary.failed_checks.join(", ")
            );
        }

        Ok(RunReport { summary, reports })
    }

    async fn run_one(&self, check: &SymbolCheck) -> CheckReport {
        let started = Instant::now();
        if let Some(description) = &check.description {
            tracing::debug!("{}: {}", check.name, description);
        }

        match self.client.check(check).await {
            Ok(outcome) => {
                tracing::info!("✅ {} ... ok ({:?})", check.name, started.elapsed());
                CheckReport::passed(check, outcome, started.elapsed())
            }
            Err(e) => {
                let url = self.client.resolve(&check.path).ok().map(|u| u.to_string());
                tracing::error!("❌ {} ... FAILED ({:?}): {}", check.name, e.category(), e);
                CheckReport::failed(check, url, &e, started.elapsed())
            }
        }
    }
}
