//! Request handler module
//!
//! Request dispatch plus the static asset resolver. Uploads live in
//! `crate::upload`.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
