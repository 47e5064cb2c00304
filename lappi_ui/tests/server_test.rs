#![allow(missing_docs)]

use http::header::{CONTENT_TYPE, HOST};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use lappi_router::RouteTable;
use lappi_ui::UiConfig;
use lappi_ui::routes::app_entries;
use lappi_ui::server::{BoxBody, UiServer, serve};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn config(dev_mode: bool) -> UiConfig {
    UiConfig {
        dev_mode,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
        ..UiConfig::default()
    }
}

fn get(path: &str) -> Request<()> {
    Request::builder()
        .uri(path)
        .header(HOST, "lappi.lan:9999")
        .body(())
        .unwrap()
}

async fn body_text(response: http::Response<BoxBody>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_known_route_is_rendered() {
    let server = UiServer::new(&config(false)).unwrap();

    let response = server.handle(get("/jobs")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CONTENT_TYPE],
        "text/html; charset=utf-8"
    );

    let html = body_text(response).await;

    assert!(html.contains(r#"<section class="page jobs-page"><h1>Jobs</h1>"#));
    assert!(html.contains(r#"<script id="lappi-init-data">window.INIT_DATA = "#));
    assert!(html.contains(r#""api_base_url":"http://lappi.lan:9999""#));
    assert!(html.contains(r#""pattern":"/jobs""#));
}

#[tokio::test]
async fn test_dev_mode_points_pages_at_dev_host() {
    let server = UiServer::new(&config(true)).unwrap();

    let html = body_text(server.handle(get("/settings")).await).await;

    assert!(html.contains(r#"<dd class="api-base-url">http://lappi.lan:8090</dd>"#));
    assert!(html.contains(r#""api_base_url":"http://lappi.lan:8090""#));
}

#[tokio::test]
async fn test_forwarded_proto_is_honoured() {
    let server = UiServer::new(&config(false)).unwrap();

    let request = Request::builder()
        .uri("/settings")
        .header(HOST, "media.example.org")
        .header("x-forwarded-proto", "https")
        .body(())
        .unwrap();

    let html = body_text(server.handle(request).await).await;

    assert!(html.contains(r#""api_base_url":"https://media.example.org""#));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = UiServer::new(&config(false)).unwrap();

    let response = server.handle(get("/playlists/42/edit")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(response).await;

    assert!(html.contains(r#"<section class="error-not-found">"#));
    assert!(html.contains(r#""pattern":"/{*catch_all}""#));
}

#[tokio::test]
async fn test_table_without_catch_all_gives_plain_not_found() {
    let mut entries = app_entries();
    entries.pop();

    let server = UiServer::with_routes(&config(false), RouteTable::new(entries).unwrap());

    let response = server.handle(get("/missing")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Not Found");
    assert_eq!(server.handle(get("/")).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_static_files() {
    let server = UiServer::new(&config(false)).unwrap();

    let response = server.handle(get("/static/styles.css")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "text/css");
    assert!(body_text(response).await.contains(".main-header"));

    for path in ["/static/missing.css", "/static/../Cargo.toml", "/static/"] {
        assert_eq!(
            server.handle(get(path)).await.status(),
            StatusCode::NOT_FOUND,
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_head_is_answered_like_get() {
    let server = UiServer::new(&config(false)).unwrap();

    let request = Request::builder()
        .method(Method::HEAD)
        .uri("/jobs")
        .header(HOST, "lappi.lan:9999")
        .body(())
        .unwrap();

    let response = server.handle(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CONTENT_TYPE],
        "text/html; charset=utf-8"
    );

    let request = Request::builder()
        .method(Method::HEAD)
        .uri("/missing")
        .header(HOST, "lappi.lan:9999")
        .body(())
        .unwrap();

    assert_eq!(server.handle(request).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_get_and_head() {
    let server = UiServer::new(&config(false)).unwrap();

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let request = Request::builder()
            .method(method.clone())
            .uri("/jobs")
            .body(())
            .unwrap();

        assert_eq!(
            server.handle(request).await.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method}"
        );
    }
}

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: lappi.lan\r\nConnection: close\r\n\r\n");

    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    response
}

#[tokio::test]
async fn test_server_outlives_broken_connections() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = Arc::new(UiServer::new(&config(false)).unwrap());

    tokio::spawn(serve(server, listener));

    let mut broken = TcpStream::connect(addr).await.unwrap();
    broken.write_all(b"NOT HTTP AT ALL\r\n\r\n").await.unwrap();
    drop(broken);

    let first = raw_get(addr, "/jobs").await;
    let second = raw_get(addr, "/nowhere").await;

    assert!(first.starts_with("HTTP/1.1 200 OK"), "{first}");
    assert!(first.contains(r#"class="page jobs-page""#));
    assert!(second.starts_with("HTTP/1.1 404 Not Found"), "{second}");
}
