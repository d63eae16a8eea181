#![allow(dead_code)]

use mockito::{Mock, ServerGuard};
use serde_json::json;

/// Page envelope mock for `path`, not yet created. `next`/`previous` are paths on the
/// same server, turned into absolute URLs the way the real API links them.
pub fn serve_page(
    server: &mut ServerGuard,
    path: &str,
    next: Option<&str>,
    previous: Option<&str>,
    names: &[&str],
) -> Mock {
    let base = server.url();
    let link = |p: Option<&str>| p.map(|p| format!("{}{}", base, p));
    let results: Vec<_> = names
        .iter()
        .map(|n| json!({ "name": n, "url": format!("{}/detail/{}", base, n) }))
        .collect();
    let body = json!({
        "count": 60,
        "next": link(next),
        "previous": link(previous),
        "results": results,
    });
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
}

pub fn url(server: &ServerGuard, path: &str) -> String {
    format!("{}{}", server.url(), path)
}
