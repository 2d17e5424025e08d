//! Static asset server for sandboxed in-browser execution environments.
//!
//! Serves a pre-built static directory with the cross-origin isolation
//! headers (COEP/COOP/CORP) such runtimes require, falls back to the entry
//! document for client-side-routed paths, and refuses anything that would
//! escape the asset root.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
