use std::sync::Arc;

use static_httpd::config::{AppState, Config};
use static_httpd::logger;
use static_httpd::server;
use static_httpd::server::signal::{start_signal_handler, SignalHandler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Fatal initialization errors abort startup, nothing is retried
    let listener = match server::initialize(&cfg) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_fatal(&e);
            return Err(e.into());
        }
    };

    let state = Arc::new(AppState::new(&cfg));

    let signals = Arc::new(SignalHandler::new());
    start_signal_handler(Arc::clone(&signals));

    server::run(listener, state, Arc::clone(&signals.shutdown)).await;

    Ok(())
}
