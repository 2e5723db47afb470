//! HTTP response builders, decoupled from the file-serving logic.
//!
//! Every response is HTTP/1.1 and carries `Connection: close`; the
//! server never reuses a connection.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 OK carrying a UTF-8 encoded HTML page.
pub fn build_html_response(body: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html")
        .header("Content-Encoding", "utf-8")
        .header("Content-Length", body.len())
        .header("Connection", "close")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found with an empty body.
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_empty_response(404)
}

/// Build 405 Method Not Allowed. Only GET is implemented.
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Allow", "GET")
        .header("Content-Length", 0)
        .header("Connection", "close")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 Internal Server Error with an empty body.
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_empty_response(500)
}

fn build_empty_response(status: u16) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Length", 0)
        .header("Connection", "close")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
