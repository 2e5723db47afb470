//! HTTP layer: response builders shared by the request dispatcher.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_500_response, build_html_response,
};
