//! End-to-end test over a real TCP listener.

use std::time::Duration;

use tokio::net::TcpListener;

use localeurl::{LocaleServer, Shutdown};

mod common;

#[tokio::test]
async fn test_server_serves_and_shuts_down() {
    let config = common::scenario_config();
    let listener = TcpListener::bind(&config.server.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = LocaleServer::new(&config).unwrap();
    let handle = tokio::spawn(server.run(listener, shutdown.signal()));

    let response = common::http_get(addr, "example.com", "/fr/about").await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains(r#""path":"/about""#));
    assert!(response.contains(r#""locale":"fr""#));

    let response = common::http_get(addr, "example.com", "/en/about").await;
    assert!(response.starts_with("HTTP/1.1 301"), "{response}");
    assert!(response.to_lowercase().contains("location: /about\r\n"));

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not shut down")
        .unwrap()
        .unwrap();
}
