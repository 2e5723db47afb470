// Per-connection handling
// Wraps the accepted stream for hyper and serves it with keep-alive
// disabled, so every connection carries exactly one request

use crate::config::AppState;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

/// Serve one accepted connection to completion.
pub async fn serve_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    let io = TokioIo::new(stream);
    let state = Arc::clone(state);

    let mut builder = http1::Builder::new();
    builder.keep_alive(false);

    let conn = builder.serve_connection(
        io,
        service_fn(move |req| {
            let state = Arc::clone(&state);
            async move { handler::handle_request(req, peer_addr, state).await }
        }),
    );

    if let Err(e) = conn.await {
        logger::log_connection_error(&e);
    }
}
