//! A minimal HTTP/1.1 server that serves static HTML pages from a
//! configured directory, generating two placeholder pages on first run
//! when the directory is missing.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
