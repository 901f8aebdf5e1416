//! Shared utilities for integration tests.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use localeurl::config::{parse_config, LocaleUrlConfig};

/// Default `en`, supported `{en, fr, fr-ca}`, `example.com` and routing key
/// `main` locale-dependent, media/static/api paths independent.
pub fn scenario_config() -> LocaleUrlConfig {
    parse_config(
        r#"
        [locales]
        supported = ["en", "fr", "fr-ca"]
        default = "en"

        [exemptions]
        media_url = "/media/"
        static_url = "/static/"
        independent_paths = ["^/api/", "\\.xml$"]
        dependent_hosts = ["example.com"]
        dependent_routing = ["main"]

        [server]
        bind_address = "127.0.0.1:0"
        default_routing_key = "main"

        [server.host_routing]
        "admin.example.com" = "admin"
        "#,
    )
    .unwrap()
}

/// Scenario config in restricted mode.
#[allow(dead_code)]
pub fn restricted_config() -> LocaleUrlConfig {
    let mut config = scenario_config();
    let mut restricted = BTreeMap::new();
    restricted.insert("ALL".to_string(), vec!["^/shop/".to_string()]);
    restricted.insert("main".to_string(), vec!["^/about".to_string()]);
    config.exemptions.restrict_mode = true;
    config.exemptions.restricted_paths = restricted;
    config
}

/// Paths that match no independence rule.
#[allow(dead_code)]
pub const DEPENDENT_PATHS: &[&str] = &[
    "/",
    "/about",
    "/about/",
    "/blog/2024/05/hello-world",
    "/french/cuisine",
    "/search?q=x",
];

/// Send a raw HTTP/1.1 GET and return the full response text.
#[allow(dead_code)]
pub async fn http_get(addr: SocketAddr, host: &str, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {host}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}
