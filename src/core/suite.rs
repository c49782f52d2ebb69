use crate::domain::model::SymbolCheck;
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::validate_non_empty_string;
use std::collections::HashSet;

// 只使用不會被伺服器移除的符號（Firefox 18.0.2）
const FIREFOX_PDB_SYM: &str = "MODULE windows x86 448794C699914DB8A8F9B9F88B98D7412 firefox.pdb";
const FIREFOX_LINUX_SYM: &str = "MODULE Linux x86_64 946C0C63132015DD88CA2EFCBB9AC4C70 firefox";

/// 內建的符號伺服器冒煙測試
pub fn default_suite() -> Vec<SymbolCheck> {
    vec![
        SymbolCheck::with_first_line(
            "basic",
            "/firefox.pdb/448794C699914DB8A8F9B9F88B98D7412/firefox.sym",
            FIREFOX_PDB_SYM,
        )
        .described("Breakpad symbol file is served with its MODULE line"),
        SymbolCheck::status_only(
            "basic_pdb",
            "/firefox.pdb/448794C699914DB8A8F9B9F88B98D7412/firefox.pd_",
        )
        .described("Native Windows debug symbols are served"),
        SymbolCheck::status_only(
            "basic_dbg",
            "libxul.so/20BC1801B0B1864324D3B9E933328A170/libxul.so.dbg.gz",
        )
        .described("Native Linux debug symbols are served"),
        SymbolCheck::status_only(
            "basic_dsym",
            "XUL/E3532A114F1C37E2AF567D8E6975F80C0/XUL.dSYM.tar.bz2",
        )
        .described("Native Mac debug symbols are served"),
        SymbolCheck::with_first_line(
            "mixed_case",
            "/firefox.pdb/448794c699914db8a8f9b9f88b98d7412/firefox.sym",
            FIREFOX_PDB_SYM,
        )
        .described("bug 660932, bug 414852"),
        SymbolCheck::with_first_line(
            "old_firefox_prefix",
            "/firefox/firefox.pdb/448794C699914DB8A8F9B9F88B98D7412/firefox.sym",
            FIREFOX_PDB_SYM,
        )
        .described("Legacy `/firefox/` app name prefix is stripped"),
        SymbolCheck::with_first_line(
            "old_thunderbird_prefix",
            "/thunderbird/firefox.pdb/448794C699914DB8A8F9B9F88B98D7412/firefox.sym",
            FIREFOX_PDB_SYM,
        )
        .described("Any app name prefix is stripped, even for another product's modules"),
        SymbolCheck::with_first_line(
            "firefox_bare_binary_name",
            "/firefox/946C0C63132015DD88CA2EFCBB9AC4C70/firefox.sym",
            FIREFOX_LINUX_SYM,
        )
        .described("bug 1246151 - app name stripping must not break the Linux/Mac `firefox` binary"),
        SymbolCheck::with_first_line(
            "firefox_bare_binary_with_prefix",
            "/firefox/firefox/946C0C63132015DD88CA2EFCBB9AC4C70/firefox.sym",
            FIREFOX_LINUX_SYM,
        )
        .described("bug 1246151 - app name prefix in front of the `firefox` binary is stripped"),
    ]
}

/// 檢查名稱與路徑不可為空，名稱不可重複
pub fn validate_suite(checks: &[SymbolCheck]) -> Result<()> {
    let mut seen = HashSet::new();
    for check in checks {
        validate_non_empty_string("checks.name", &check.name)?;
        validate_non_empty_string("checks.path", &check.path)?;
        if !seen.insert(check.name.as_str()) {
            return Err(SmokeError::DuplicateCheck {
                name: check.name.clone(),
            });
        }
    }
    Ok(())
}
