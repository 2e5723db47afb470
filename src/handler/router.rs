//! Dispatch entry point: method validation and access logging around
//! the static file service.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// Only GET is implemented; every other method is answered with 405
/// rather than left hanging.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = if method == Method::GET {
        static_files::serve(&state.static_root, &path).await
    } else {
        logger::log_method_not_allowed(&method);
        http::build_405_response()
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(&peer_addr, method.as_str(), &path);
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length(&response);
        logger::log_access(&entry);
    }

    Ok(response)
}

fn content_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("Content-Length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
