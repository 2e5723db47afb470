// Server module entry point
// Provides listener bring-up, the sequential accept loop and shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), so the file is
// mounted as server_loop
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::create_listener;
pub use server_loop::run;

use crate::bootstrap;
use crate::config::Config;
use crate::error::FatalError;
use crate::logger;
use tokio::net::TcpListener;

/// Bring the server up: bootstrap the static root if needed, then bind
/// and start listening.
///
/// Any failure here is fatal; the caller is expected to log it and
/// exit rather than retry. On success the returned listener is the only
/// open listening socket and is owned by the accept loop from then on.
pub fn initialize(config: &Config) -> Result<TcpListener, FatalError> {
    bootstrap::ensure_static_root(&config.static_root(), config.server.bootstrap_if_missing)?;

    let addr = config
        .socket_addr()
        .map_err(|source| FatalError::InvalidAddress {
            addr: format!("{}:{}", config.server.host, config.server.port),
            source,
        })?;

    let listener =
        create_listener(addr).map_err(|source| FatalError::BindFailure { addr, source })?;

    // Port 0 binds an ephemeral port, report the one actually assigned
    let bound = listener.local_addr().unwrap_or(addr);
    logger::log_server_start(&bound, config);

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, ServerConfig};
    use tempdir::TempDir;

    fn config_for(root: &std::path::Path, bootstrap_if_missing: bool) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                static_root: root.to_string_lossy().into_owned(),
                bootstrap_if_missing,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
            },
        }
    }

    #[tokio::test]
    async fn initialize_bootstraps_and_binds() {
        let tmp = TempDir::new("server").unwrap();
        let root = tmp.path().join("wwwroot");
        let cfg = config_for(&root, true);

        let listener = initialize(&cfg).expect("initialize");
        assert!(root.join("index.html").is_file());
        assert!(listener.local_addr().unwrap().port() > 0);
    }

    #[tokio::test]
    async fn initialize_fails_without_root_when_bootstrap_disabled() {
        let tmp = TempDir::new("server").unwrap();
        let root = tmp.path().join("absent");
        let cfg = config_for(&root, false);

        let err = initialize(&cfg).unwrap_err();
        assert!(matches!(err, FatalError::MissingRoot(_)));
    }

    #[tokio::test]
    async fn initialize_rejects_unparseable_host() {
        let tmp = TempDir::new("server").unwrap();
        let mut cfg = config_for(tmp.path(), true);
        cfg.server.host = "not a host".to_string();

        let err = initialize(&cfg).unwrap_err();
        assert!(matches!(err, FatalError::InvalidAddress { .. }));
    }
}
