//! Request handler module
//!
//! Turns one accepted request into exactly one response: method check,
//! path resolution against the static root, file service.

pub mod router;
pub mod static_files;

pub use router::handle_request;
