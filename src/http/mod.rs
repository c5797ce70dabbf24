//! HTTP protocol layer module
//!
//! MIME lookup and response builders shared by the request handlers.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_500_response, build_501_response, build_file_not_found_response,
    build_file_response, build_options_response, build_upload_json_response,
};
