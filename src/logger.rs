//! Logging utilities for the server: lifecycle banners, access log
//! lines and error reporting. Everything goes to stdout/stderr.

use crate::config::Config;
use crate::error::FatalError;
use chrono::{DateTime, Local};
use std::net::SocketAddr;
use std::path::Path;

fn write_info(message: &str) {
    println!("[{}] {message}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}

fn write_error(message: &str) {
    eprintln!("[{}] {message}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Static file server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Static root: {}", config.server.static_root));
    write_info(&format!("Log level: {}", config.logging.level));
    write_info("======================================");
}

pub fn log_server_stop() {
    write_info("[Shutdown] Server stopped, listener closed");
}

pub fn log_bootstrap(root: &Path) {
    write_info(&format!(
        "[Bootstrap] Created static root '{}' with placeholder pages",
        root.display()
    ));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_accept_error(err: &std::io::Error) {
    write_error(&format!("[ERROR] Failed to accept connection: {err}"));
}

pub fn log_access(entry: &AccessLogEntry) {
    write_info(&entry.format_common());
}

pub fn log_method_not_allowed(method: &hyper::Method) {
    write_error(&format!("[WARN] Method not allowed: {method}"));
}

pub fn log_missing_file(path: &Path) {
    write_error(&format!(
        "[WARN] Could not find the file '{}'",
        path.display()
    ));
}

pub fn log_traversal_blocked(raw_path: &str) {
    write_error(&format!("[WARN] Path traversal attempt blocked: {raw_path}"));
}

pub fn log_critical(message: &str) {
    write_error(&format!("[CRITICAL] {message}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_fatal(err: &FatalError) {
    write_error(&format!("[CRITICAL] {err}, stopping..."));
}

/// One completed request, rendered in Common Log Format.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: DateTime<Local>,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub body_bytes: usize,
}

impl AccessLogEntry {
    pub fn new(remote_addr: &SocketAddr, method: &str, path: &str) -> Self {
        Self {
            remote_addr: remote_addr.to_string(),
            time: Local::now(),
            method: method.to_string(),
            path: path.to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_format_contains_request_line_and_status() {
        let addr: SocketAddr = "192.168.1.1:54321".parse().unwrap();
        let mut entry = AccessLogEntry::new(&addr, "GET", "/contacts.html");
        entry.status = 200;
        entry.body_bytes = 512;

        let line = entry.format_common();
        assert!(line.starts_with("192.168.1.1:54321 - - ["));
        assert!(line.contains("\"GET /contacts.html HTTP/1.1\""));
        assert!(line.ends_with("200 512"));
    }
}
