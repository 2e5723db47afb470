use std::net::AddrParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Startup errors. Any of these aborts the process; none is retried.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("static root '{0}' does not exist and bootstrapping is disabled")]
    MissingRoot(PathBuf),
    #[error("failed to bootstrap static root '{path}': {source}")]
    Bootstrap {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        source: AddrParseError,
    },
    #[error("failed to bind {addr}: {source}")]
    BindFailure {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
}

/// Request-scoped errors. Contained within the dispatch of a single
/// request and surfaced as an HTTP status, never to the accept loop.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
