//! Playlist client - typed access to the catalog API's playlist resources
//!
//! This library maps the weakly-typed JSON of the playlist endpoints onto
//! domain records, for use by integration tests and the bundled CLI.

/// Client modules for interacting with the catalog API
pub mod clients;
/// Credentials and endpoint configuration
pub mod config;

pub use config::Config;
