use httpmock::prelude::*;
use httpmock::Method::HEAD;

const FIREFOX_PDB_SYM: &str = "MODULE windows x86 448794C699914DB8A8F9B9F88B98D7412 firefox.pdb";
const FIREFOX_LINUX_SYM: &str = "MODULE Linux x86_64 946C0C63132015DD88CA2EFCBB9AC4C70 firefox";

/// 模擬符號伺服器：debug-id 不分大小寫，應用程式前綴會被去掉
pub fn mock_symbol_server(server: &MockServer) {
    for path in [
        "/firefox.pdb/448794C699914DB8A8F9B9F88B98D7412/firefox.sym",
        "/firefox.pdb/448794c699914db8a8f9b9f88b98d7412/firefox.sym",
        "/firefox/firefox.pdb/448794C699914DB8A8F9B9F88B98D7412/firefox.sym",
        "/thunderbird/firefox.pdb/448794C699914DB8A8F9B9F88B98D7412/firefox.sym",
    ] {
        server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(200)
                .header("Content-Type", "text/plain")
                .body(format!("{}\r\nFILE 0 c:\\builds\\firefox.cpp\r\n", FIREFOX_PDB_SYM));
        });
    }

    for path in [
        "/firefox/946C0C63132015DD88CA2EFCBB9AC4C70/firefox.sym",
        "/firefox/firefox/946C0C63132015DD88CA2EFCBB9AC4C70/firefox.sym",
    ] {
        server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(200)
                .body(format!("{}\nFILE 0 /builds/firefox.cpp\n", FIREFOX_LINUX_SYM));
        });
    }

    for path in [
        "/firefox.pdb/448794C699914DB8A8F9B9F88B98D7412/firefox.pd_",
        "/libxul.so/20BC1801B0B1864324D3B9E933328A170/libxul.so.dbg.gz",
        "/XUL/E3532A114F1C37E2AF567D8E6975F80C0/XUL.dSYM.tar.bz2",
    ] {
        server.mock(|when, then| {
            when.method(HEAD).path(path);
            then.status(200);
        });
    }
}
