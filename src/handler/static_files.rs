//! Static file serving: path resolution against the static root and
//! the read-and-respond step.

use crate::error::RequestError;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Map a request path onto a file under the static root.
///
/// `/` resolves to `index.html`. The leading separator is stripped
/// before joining so it cannot act as an absolute-path override, and
/// any path containing a `..` component is rejected outright.
pub fn resolve_path(static_root: &Path, raw_path: &str) -> Option<PathBuf> {
    if raw_path == "/" {
        return Some(static_root.join("index.html"));
    }

    let relative = Path::new(raw_path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return None;
    }

    Some(static_root.join(relative))
}

/// Serve one GET request for `raw_path` from the static root.
pub async fn serve(static_root: &Path, raw_path: &str) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve_path(static_root, raw_path) else {
        logger::log_traversal_blocked(raw_path);
        return http::build_404_response();
    };

    match load_page(&file_path).await {
        Ok(body) => http::build_html_response(Bytes::from(body)),
        Err(RequestError::NotFound(path)) => {
            logger::log_missing_file(&path);
            http::build_404_response()
        }
        Err(RequestError::Io(e)) => {
            logger::log_critical(&format!(
                "An error occurred while serving '{}'. Exception: {e}",
                file_path.display()
            ));
            logger::log_error(&format!("Exception caught: {e}"));
            http::build_500_response()
        }
    }
}

/// Read a page as text and hand back its UTF-8 encoding.
async fn load_page(path: &Path) -> Result<Vec<u8>, RequestError> {
    if !path.is_file() {
        return Err(RequestError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).await?;
    Ok(text.into_bytes())
}
