//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! request dispatcher and the transport.

pub mod cache;
pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use cache::CachePolicy;
pub use response::{
    build_403_response, build_404_response, build_405_response, build_500_response,
    build_ok_response, build_options_response, ResponseDescriptor,
};
