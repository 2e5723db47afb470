use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory the static pages are served from, relative to the
    /// working directory unless absolute.
    pub static_root: String,
    /// Generate placeholder pages when the static root is missing.
    pub bootstrap_if_missing: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.static_root", "wwwroot")?
            .set_default("server.bootstrap_if_missing", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }

    pub fn static_root(&self) -> PathBuf {
        PathBuf::from(&self.server.static_root)
    }
}

/// Read-only per-process state shared with the request dispatcher.
pub struct AppState {
    pub config: Config,
    pub static_root: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            static_root: config.static_root(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_config(host: &str, port: u16) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
                static_root: "wwwroot".to_string(),
                bootstrap_if_missing: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: true,
            },
        }
    }

    #[test]
    fn defaults_apply_when_no_file_or_env_present() {
        let cfg = Config::load().expect("load with defaults");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.static_root, "wwwroot");
        assert!(cfg.server.bootstrap_if_missing);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn socket_addr_parses_host_and_port() {
        let cfg = test_config("127.0.0.1", 9090);
        let addr = cfg.socket_addr().expect("valid address");
        assert_eq!(addr.to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let cfg = test_config("not-an-ip", 8080);
        assert!(cfg.socket_addr().is_err());
    }
}
