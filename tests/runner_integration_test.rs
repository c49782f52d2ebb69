use anyhow::Result;
use httpmock::prelude::*;
use httpmock::Method::HEAD;
use symbol_smoke::core::check::parse_server;
use symbol_smoke::utils::error::FailureCategory;
use symbol_smoke::utils::validation::Validate;
use symbol_smoke::{default_suite, Selection, SuiteConfig, SuiteRunner, SymbolCheck, SymbolClient};
use tempfile::TempDir;

mod common;

use common::mock_symbol_server;

fn runner_for(server: &MockServer) -> SuiteRunner {
    let client = SymbolClient::new(parse_server(&server.base_url()).unwrap()).unwrap();
    SuiteRunner::new(client)
}

#[tokio::test]
async fn test_default_suite_passes_against_mock_server() -> Result<()> {
    let server = MockServer::start();
    mock_symbol_server(&server);

    let report = runner_for(&server).run(&default_suite()).await?;

    assert!(report.is_success(), "failures: {:?}", report.summary.failed_checks);
    assert_eq!(report.summary.selected, 9);
    assert_eq!(report.summary.executed, 9);
    assert_eq!(report.summary.passed, 9);

    let mixed = report.reports.iter().find(|r| r.name == "mixed_case").unwrap();
    let basic = report.reports.iter().find(|r| r.name == "basic").unwrap();
    assert_eq!(
        mixed.outcome.as_ref().unwrap().first_line,
        basic.outcome.as_ref().unwrap().first_line
    );
    Ok(())
}

#[tokio::test]
async fn test_failures_are_reported_per_check() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/a.pdb/ABC/a.sym");
        then.status(200).body("MODULE windows x86 abc a.pdb\n");
    });
    let pdb_mock = server.mock(|when, then| {
        when.method(HEAD).path("/a.pdb/ABC/a.pd_");
        then.status(200);
    });

    let checks = vec![
        SymbolCheck::with_first_line("sym", "/a.pdb/ABC/a.sym", "MODULE windows x86 ABC a.pdb"),
        SymbolCheck::status_only("missing", "/b.pdb/DEF/b.pd_"),
        SymbolCheck::status_only("pdb", "/a.pdb/ABC/a.pd_"),
    ];

    let report = runner_for(&server).run(&checks).await?;

    pdb_mock.assert();
    assert!(!report.is_success());
    assert_eq!(report.summary.executed, 3);
    assert_eq!(report.summary.failed, 2);
    assert_eq!(report.summary.failed_checks, vec!["sym", "missing"]);

    let sym = &report.reports[0];
    assert_eq!(sym.category, Some(FailureCategory::Assertion));
    assert!(sym.message.as_ref().unwrap().contains("first line mismatch"));

    let missing = &report.reports[1];
    assert_eq!(missing.category, Some(FailureCategory::Assertion));
    assert!(missing.message.as_ref().unwrap().contains("got 404"));
    assert_eq!(
        missing.url.as_deref(),
        Some(format!("{}/b.pdb/DEF/b.pd_", server.base_url()).as_str())
    );
    Ok(())
}

#[tokio::test]
async fn test_failfast_stops_after_first_failure() -> Result<()> {
    let server = MockServer::start();
    let never_called = server.mock(|when, then| {
        when.method(HEAD).path("/ok/A/ok.pd_");
        then.status(200);
    });

    let checks = vec![
        SymbolCheck::status_only("missing", "/missing/A/missing.pd_"),
        SymbolCheck::status_only("ok", "/ok/A/ok.pd_"),
    ];

    let report = runner_for(&server).with_failfast(true).run(&checks).await?;

    never_called.assert_hits(0);
    assert_eq!(report.summary.selected, 2);
    assert_eq!(report.summary.executed, 1);
    assert_eq!(report.summary.failed, 1);
    Ok(())
}

#[tokio::test]
async fn test_selection_limits_requests() -> Result<()> {
    let server = MockServer::start();
    mock_symbol_server(&server);

    let report = runner_for(&server)
        .with_selection(Selection::new(vec!["basic_d".to_string()], false))
        .run(&default_suite())
        .await?;

    let names: Vec<&str> = report.reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["basic_dbg", "basic_dsym"]);
    assert!(report.is_success());
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_failure() -> Result<()> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);

    let client = SymbolClient::new(parse_server(&format!("http://127.0.0.1:{}/", port))?)?;
    let checks = vec![
        SymbolCheck::status_only("first", "/a/B/a.pd_"),
        SymbolCheck::status_only("second", "/c/D/c.pd_"),
    ];

    let report = SuiteRunner::new(client).run(&checks).await?;

    assert_eq!(report.summary.executed, 2);
    assert_eq!(report.summary.failed, 2);
    for check in &report.reports {
        assert_eq!(check.category, Some(FailureCategory::Transport));
    }
    Ok(())
}

#[tokio::test]
async fn test_suite_file_against_mock_server() -> Result<()> {
    let server = MockServer::start();
    let sym_mock = server.mock(|when, then| {
        when.method(GET).path("/app/XUL/E35/XUL.sym");
        then.status(200).body("MODULE mac x86_64 E35 XUL\n");
    });

    let temp_dir = TempDir::new()?;
    let suite_path = temp_dir.path().join("suite.toml");
    let content = format!(
        r#"
server = "{}/app/"

[[checks]]
name = "xul"
path = "XUL/E35/XUL.sym"
first_line = "MODULE mac x86_64 E35 XUL"
"#,
        server.base_url()
    );
    tokio::fs::write(&suite_path, content).await?;

    let suite = SuiteConfig::from_file(&suite_path)?;
    suite.validate()?;

    let client = SymbolClient::new(parse_server(suite.server.as_deref().unwrap())?)?;
    let report = SuiteRunner::new(client).run(&suite.checks).await?;

    sym_mock.assert();
    assert!(report.is_success());

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["summary"]["passed"], 1);
    assert_eq!(json["reports"][0]["method"], "GET");
    assert_eq!(
        json["reports"][0]["outcome"]["first_line"],
        "MODULE mac x86_64 E35 XUL"
    );
    Ok(())
}
