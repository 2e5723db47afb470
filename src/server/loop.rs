// Server main loop
// Sequential accept loop: one connection is served to completion before
// the next accept

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::serve_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until `shutdown` fires.
///
/// Connections are handled inline, not spawned: the loop owns the
/// listener and processes exactly one request at a time, matching the
/// single-flow design. The shutdown notification is only observed at
/// the accept point, so an in-flight request always completes. When the
/// loop exits the listener is dropped, which closes the socket.
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        if state.config.logging.access_log {
                            logger::log_connection_accepted(&peer_addr);
                        }
                        serve_connection(stream, peer_addr, &state).await;
                    }
                    Err(e) => {
                        logger::log_accept_error(&e);
                    }
                }
            }

            _ = shutdown.notified() => {
                break;
            }
        }
    }

    drop(listener);
    logger::log_server_stop();
}
