use std::{collections::HashMap, path::Path};

use log::debug;

use crate::clients::{
    endpoints::{DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL},
    errors::{Error, Result},
};

const DEFAULT_GRANT_TYPE: &str = "refresh_token";

/// Credentials and endpoints used to reach the catalog API.
///
/// Built explicitly and handed to the transport, nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub grant_type: String,
    pub api_base_url: String,
    pub token_url: String,
}

impl Config {
    // Load `.env` if there is one, then read PLAYLIST_* variables
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {path:?}"),
            Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
            Err(e) => return Err(e.into()),
        }

        Ok(Config {
            client_id: std::env::var("PLAYLIST_CLIENT_ID")?,
            client_secret: std::env::var("PLAYLIST_CLIENT_SECRET")?,
            refresh_token: std::env::var("PLAYLIST_REFRESH_TOKEN")?,
            grant_type: std::env::var("PLAYLIST_GRANT_TYPE")
                .unwrap_or_else(|_| DEFAULT_GRANT_TYPE.to_string()),
            api_base_url: std::env::var("PLAYLIST_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            token_url: std::env::var("PLAYLIST_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
        })
    }

    /// Reads a `key=value` properties file without touching the process environment.
    ///
    /// Lines are parsed in `.env` syntax: `key=value` pairs, `#` comments and
    /// optionally quoted values. The `key: value`, `key value` and `!` comment
    /// forms of Java properties files are rejected as configuration errors.
    ///
    /// `client_id`, `client_secret` and `refresh_token` are required; `grant_type`,
    /// `api_base_url` and `token_url` fall back to their defaults.
    pub fn from_properties(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut properties = HashMap::new();
        for entry in dotenvy::from_path_iter(path)? {
            let (key, value) = entry?;
            properties.insert(key, value);
        }
        debug!("Read {} properties from {path:?}", properties.len());

        let mut required = |key: &str| {
            properties.remove(key).ok_or_else(|| {
                Error::ConfigurationError(format!("Missing `{key}` in {}", path.display()))
            })
        };
        let client_id = required("client_id")?;
        let client_secret = required("client_secret")?;
        let refresh_token = required("refresh_token")?;

        Ok(Config {
            client_id,
            client_secret,
            refresh_token,
            grant_type: properties
                .remove("grant_type")
                .unwrap_or_else(|| DEFAULT_GRANT_TYPE.to_string()),
            api_base_url: properties
                .remove("api_base_url")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            token_url: properties
                .remove("token_url")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
        })
    }
}
