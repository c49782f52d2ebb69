use symbol_smoke::config::effective_server;
use symbol_smoke::core::check::parse_server;
use symbol_smoke::utils::{logger, validation::Validate};
use symbol_smoke::{
    default_suite, CliConfig, Selection, SmokeError, SuiteConfig, SuiteRunner, SymbolCheck,
    SymbolClient,
};

const EXIT_FAILED: i32 = 1;
const EXIT_CONFIG: i32 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match CliConfig::from_args(std::env::args()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::debug!("CLI config: {:?}", config);

    let (server, checks) = match load_run(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(EXIT_CONFIG);
        }
    };

    let selection = Selection::new(config.patterns.clone(), config.exact);

    if config.list {
        for check in selection.apply(&checks) {
            println!("{}", check.name);
        }
        return Ok(());
    }

    let client = match parse_server(&server).and_then(SymbolClient::new) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Failed to set up HTTP client: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(EXIT_CONFIG);
        }
    };
    let runner = SuiteRunner::new(client)
        .with_selection(selection)
        .with_failfast(config.failfast);

    let report = match runner.run(&checks).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(EXIT_CONFIG);
        }
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for failed in report.reports.iter().filter(|r| !r.passed) {
            println!(
                "FAIL: {} ({})",
                failed.name,
                failed.message.as_deref().unwrap_or("unknown error")
            );
        }
        let summary = &report.summary;
        println!(
            "Ran {} checks in {:.3}s against {}",
            summary.executed,
            summary.total_duration.as_secs_f64(),
            summary.server
        );
        if summary.is_success() {
            println!("OK");
        } else {
            println!("FAILED (failures={})", summary.failed);
        }
    }

    if !report.is_success() {
        std::process::exit(EXIT_FAILED);
    }

    Ok(())
}

/// 決定伺服器與要執行的檢查清單
fn load_run(config: &CliConfig) -> Result<(String, Vec<SymbolCheck>), SmokeError> {
    config.validate()?;

    let (suite_server, checks) = match &config.suite {
        Some(path) => {
            tracing::info!("📁 Loading suite from: {}", path.display());
            let suite = SuiteConfig::from_file(path)?;
            suite.validate()?;
            (suite.server, suite.checks)
        }
        None => (None, default_suite()),
    };

    let server = effective_server(config.server.as_deref(), suite_server.as_deref()).to_string();
    parse_server(&server)?;

    Ok((server, checks))
}
