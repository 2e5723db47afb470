// Signal handling
//
// SIGTERM and SIGINT (Ctrl+C) request a graceful shutdown: the accept
// loop is notified and exits after the in-flight request, if any,
// completes. On non-Unix platforms only Ctrl+C is wired up.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub struct SignalHandler {
    /// Fired once when a shutdown signal arrives.
    pub shutdown: Arc<Notify>,
    pub shutdown_requested: Arc<AtomicBool>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request shutdown programmatically, same path the signals take.
    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        // notify_one stores a permit, so the accept loop picks the
        // signal up even if it is mid-request rather than waiting
        self.shutdown.notify_one();
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn the background task that listens for process signals.
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                println!("\n[SIGNAL] SIGTERM received, initiating graceful shutdown...");
            }
            _ = sigint.recv() => {
                println!("\n[SIGNAL] SIGINT received (Ctrl+C), initiating graceful shutdown...");
            }
        }

        handler.request_shutdown();
    });
}

/// Windows fallback, only Ctrl+C is supported.
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            println!("\n[SIGNAL] Ctrl+C received, initiating graceful shutdown...");
            handler.request_shutdown();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn request_shutdown_stores_a_permit() {
        let handler = SignalHandler::new();
        handler.request_shutdown();

        assert!(handler.shutdown_requested.load(Ordering::SeqCst));
        // The permit is consumable even though nobody was waiting yet
        handler.shutdown.notified().await;
    }
}
