//! Core utilities shared by every command
//!
//! - `config`: flag / environment / default resolution
//! - `http`: request headers for the NBA stats API
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod http;
pub mod logging;

pub use config::SyncConfig;
pub use http::stats_header_map;
pub use logging::initialize_logging;
