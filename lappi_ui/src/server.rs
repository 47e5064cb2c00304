//! HTTP front of the UI: static files plus server-rendered routes.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HOST, HeaderValue};
use http::request::Parts;
use http::{Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use lappi_api::PageLocation;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use crate::render::render_path;
use crate::routes::{AppRouteTable, app_routes};
use crate::{AppContext, ClientRegistrar, UiConfig, UiError};

/// Response body type of the server.
pub type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

fn full<T: Into<Bytes>>(chunk: T) -> BoxBody {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}

fn response(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<Bytes>,
) -> Response<BoxBody> {
    let mut response = Response::new(full(body));

    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));

    response
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Location of the page as the browser sees it.
///
/// Taken from the `Host` header (or the request URI authority), with the
/// scheme from `X-Forwarded-Proto` when a proxy terminates TLS.
pub fn page_location(parts: &Parts, fallback_host: &str) -> PageLocation {
    let host = parts
        .headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| parts.uri.authority().map(|authority| authority.to_string()))
        .unwrap_or_else(|| fallback_host.to_owned());

    let protocol = parts
        .headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_owned())
        .unwrap_or_else(|| "http".to_owned());

    PageLocation::new(protocol, host)
}

/// The UI server: route table, client registrar and static directory.
#[derive(Debug)]
pub struct UiServer {
    routes: AppRouteTable,
    registrar: ClientRegistrar,
    static_dir: PathBuf,
    fallback_host: String,
}

impl UiServer {
    /// Server for `config` with the application routes.
    pub fn new(config: &UiConfig) -> Result<Self, UiError> {
        Ok(Self::with_routes(config, app_routes()?))
    }

    /// Server for `config` with a custom route table.
    pub fn with_routes(config: &UiConfig, routes: AppRouteTable) -> Self {
        Self {
            routes,
            registrar: ClientRegistrar::from_config(config),
            static_dir: config.static_dir.clone(),
            fallback_host: config.bind_addr.to_string(),
        }
    }

    /// Route table in use.
    pub fn routes(&self) -> &AppRouteTable {
        &self.routes
    }

    /// Answer one request.
    ///
    /// `GET /static/*` reads from the static directory; any other `GET`
    /// renders the route table with a client registered for this request
    /// only.
    pub async fn handle<B>(&self, req: Request<B>) -> Response<BoxBody> {
        let (parts, _) = req.into_parts();

        if parts.method != Method::GET && parts.method != Method::HEAD {
            return response(
                StatusCode::METHOD_NOT_ALLOWED,
                "text/plain",
                "Method Not Allowed",
            );
        }

        let path = parts.uri.path();

        if let Some(file) = path.strip_prefix("/static/") {
            return self.serve_static(file).await;
        }

        let page = page_location(&parts, &self.fallback_host);
        let mut app = AppContext::new();

        if let Err(e) = self.registrar.register(&mut app, &page) {
            tracing::error!(error = %e, "failed to register api client");

            return response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "text/plain",
                "Internal Server Error",
            );
        }

        match render_path(&self.routes, &app, path).await {
            Some(rendered) => {
                let status = if rendered.fallback {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::OK
                };

                tracing::debug!(
                    path,
                    pattern = %rendered.pattern,
                    status = status.as_u16(),
                    "page rendered"
                );

                response(status, "text/html; charset=utf-8", rendered.html)
            }
            None => response(StatusCode::NOT_FOUND, "text/plain", "Not Found"),
        }
    }

    async fn serve_static(&self, file: &str) -> Response<BoxBody> {
        let relative = Path::new(file);

        if file.is_empty()
            || !relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)))
        {
            return response(StatusCode::NOT_FOUND, "text/plain", "File not found");
        }

        let file_path = self.static_dir.join(relative);

        match tokio::fs::read(&file_path).await {
            Ok(content) => response(StatusCode::OK, content_type(&file_path), content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                response(StatusCode::NOT_FOUND, "text/plain", "File not found")
            }
            Err(e) => {
                tracing::error!(
                    path = %file_path.display(),
                    error = %e,
                    "failed to read static file"
                );

                response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "text/plain",
                    "Error reading file",
                )
            }
        }
    }
}

/// Accept connections on `listener` forever.
///
/// A failed accept (e.g. out of file descriptors) is logged and the loop
/// keeps going after a short pause.
pub async fn serve(server: Arc<UiServer>, listener: TcpListener) -> Result<(), UiError> {
    loop {
        let (stream, remote) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!(error = %e, "failed to accept connection");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        let io = TokioIo::new(stream);
        let server = Arc::clone(&server);

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let server = Arc::clone(&server);
                async move { Ok::<_, hyper::Error>(server.handle(req).await) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::error!(%remote, error = %err, "error serving connection");
            }
        });
    }
}
