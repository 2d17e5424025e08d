//! End-to-end dispatcher tests against a real asset tree.
//!
//! Everything goes through `dispatch` with a capturing logger, so responses
//! and log content can be asserted without a socket.

use std::fs;

use hyper::{Method, StatusCode};
use tempfile::TempDir;

use spa_static_server::config::{LoggingConfig, ServerConfig};
use spa_static_server::handler::dispatch;
use spa_static_server::http::headers::BASELINE_HEADERS;
use spa_static_server::http::ResponseDescriptor;
use spa_static_server::logger::{Level, MemoryLogger};

struct TestServer {
    config: ServerConfig,
    logger: MemoryLogger,
    // Held so the asset tree outlives the test
    _dir: TempDir,
}

fn test_server() -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<html>entry</html>").unwrap();
    fs::write(dir.path().join("app.js"), "export const app = 1;").unwrap();
    fs::write(dir.path().join("data.unknownext"), [0u8, 1, 2, 3]).unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/index.html"), "<html>docs</html>").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/logo.svg"), "<svg/>").unwrap();

    TestServer {
        config: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: dir.path().to_path_buf(),
            index_document: "index.html".to_string(),
            logging: LoggingConfig {
                access_log: false,
                format: "combined".to_string(),
            },
        },
        logger: MemoryLogger::new(),
        _dir: dir,
    }
}

async fn get(server: &TestServer, path: &str) -> ResponseDescriptor {
    dispatch(&server.config, &server.logger, &Method::GET, path).await
}

fn assert_baseline_headers(descriptor: &ResponseDescriptor) {
    for (name, value) in BASELINE_HEADERS {
        assert_eq!(
            descriptor.header_value(name),
            Some(value),
            "missing baseline header {name} on {}",
            descriptor.status
        );
    }
}

#[tokio::test]
async fn serves_existing_file_with_mime_and_length() {
    let server = test_server();
    let response = get(&server, "/app.js").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header_value("Content-Type"),
        Some("application/javascript; charset=utf-8")
    );
    assert_eq!(
        response.header_value("Content-Length"),
        Some(response.body.len().to_string().as_str())
    );
    assert_eq!(&response.body[..], b"export const app = 1;");
}

#[tokio::test]
async fn unknown_extension_gets_octet_stream() {
    let server = test_server();
    let response = get(&server, "/data.unknownext").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header_value("Content-Type"),
        Some("application/octet-stream")
    );
}

#[tokio::test]
async fn html_is_no_cache_assets_are_immutable() {
    let server = test_server();

    let page = get(&server, "/").await;
    assert_eq!(page.header_value("Cache-Control"), Some("no-cache"));

    let asset = get(&server, "/assets/logo.svg").await;
    assert_eq!(
        asset.header_value("Cache-Control"),
        Some("public, max-age=31536000, immutable")
    );
}

#[tokio::test]
async fn traversal_is_forbidden_and_logged() {
    let server = test_server();
    let response = get(&server, "/../../etc/passwd").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(server
        .logger
        .contains(Level::Warn, "outside static directory"));
    // The escape must not fall through to the SPA fallback
    assert!(!server.logger.contains(Level::Info, "[SPA fallback]"));
    assert!(!response.body.windows(4).any(|w| w == b"root"));
}

#[tokio::test]
async fn percent_encoded_traversal_is_forbidden() {
    let server = test_server();
    let response = get(&server, "/%2e%2e/%2e%2e/etc/passwd").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn spa_fallback_returns_entry_document_bytes() {
    let server = test_server();

    let root = get(&server, "/").await;
    let routed = get(&server, "/settings/profile").await;

    assert_eq!(routed.status, StatusCode::OK);
    assert_eq!(routed.body, root.body);
    assert_eq!(
        routed.header_value("Content-Type"),
        Some("text/html; charset=utf-8")
    );
    assert!(server
        .logger
        .contains(Level::Info, "[SPA fallback] /settings/profile -> index.html"));
}

#[tokio::test]
async fn missing_fallback_document_is_404() {
    let server = test_server();
    fs::remove_file(server.config.static_dir.join("index.html")).unwrap();

    let response = get(&server, "/settings/profile").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn directory_with_index_serves_it() {
    let server = test_server();
    let response = get(&server, "/docs/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], b"<html>docs</html>");
}

#[tokio::test]
async fn directory_without_index_is_404_not_a_listing() {
    let server = test_server();
    let response = get(&server, "/assets/").await;

    // assets/ exists but has no index.html; must not fall back either
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(!server.logger.contains(Level::Info, "[SPA fallback]"));
    assert!(!response.body.windows(8).any(|w| w == &b"logo.svg"[..]));
}

#[tokio::test]
async fn head_matches_get_headers_with_empty_body() {
    let server = test_server();

    let get_response = get(&server, "/app.js").await;
    let head_response =
        dispatch(&server.config, &server.logger, &Method::HEAD, "/app.js").await;

    assert_eq!(head_response.status, StatusCode::OK);
    assert_eq!(head_response.headers, get_response.headers);

    let response = head_response.into_response(true);
    assert_eq!(
        response.headers().get("Content-Length").unwrap(),
        get_response.body.len().to_string().as_str()
    );
}

#[tokio::test]
async fn options_is_bare_200_with_baseline_headers() {
    let server = test_server();
    let response = dispatch(&server.config, &server.logger, &Method::OPTIONS, "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_empty());
    assert_eq!(response.headers.len(), BASELINE_HEADERS.len());
    assert_baseline_headers(&response);
}

#[tokio::test]
async fn unsupported_method_is_405() {
    let server = test_server();
    let response = dispatch(&server.config, &server.logger, &Method::POST, "/app.js").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.header_value("Allow"), Some("GET, HEAD, OPTIONS"));
}

#[tokio::test]
async fn baseline_headers_on_success_and_errors() {
    let server = test_server();

    assert_baseline_headers(&get(&server, "/app.js").await);
    assert_baseline_headers(&get(&server, "/../escape").await);
    assert_baseline_headers(&get(&server, "/assets/").await);
    assert_baseline_headers(
        &dispatch(&server.config, &server.logger, &Method::POST, "/").await,
    );
}
