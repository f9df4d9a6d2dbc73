use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::errors::{Error, Result};
use crate::config::Config;

/// Status and raw body of an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Response {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx response into [`Error::UnexpectedStatus`], keeping the raw body.
    pub fn expect_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::UnexpectedStatus {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// Executes HTTP verbs against paths relative to the API base.
///
/// Only network-level failures are errors here: every status code, 4xx and 5xx
/// included, comes back as a [`Response`] so callers decide what a failure is.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Response>;
    async fn post(&self, path: &str, body: &Value) -> Result<Response>;
    async fn put(&self, path: &str, body: &Value) -> Result<Response>;
    async fn delete(&self, path: &str) -> Result<Response>;
}

#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
}

/// [`Transport`] over `reqwest`, authenticating every request with a bearer token.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        HttpTransport {
            client: reqwest::Client::new(),
            base_url,
            access_token: access_token.into(),
        }
    }

    // Exchange the configured grant for an access token, once. The token is
    // never refreshed, a transport outliving it has to be rebuilt.
    pub async fn authorize(config: &Config) -> Result<Self> {
        debug!("Requesting access token from {} ...", config.token_url);
        let client = reqwest::Client::new();
        let response = client
            .post(&config.token_url)
            .basic_auth(&config.client_id, Some(&config.client_secret))
            .form(&[
                ("grant_type", config.grant_type.as_str()),
                ("refresh_token", config.refresh_token.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::AuthorizationError(format!(
                "token endpoint answered {}: {body}",
                status.as_u16()
            )));
        }
        let token: TokenResponse = serde_json::from_str(&body)?;
        debug!("Obtained access token");

        Ok(HttpTransport {
            client,
            ..HttpTransport::new(config.api_base_url.clone(), token.access_token)
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Response> {
        let response = request.bearer_auth(&self.access_token).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("{method} {path} -> {status}");
        Ok(Response { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Response> {
        let request = self.client.get(self.url(path));
        self.send("GET", path, request).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Response> {
        let request = self.client.post(self.url(path)).json(body);
        self.send("POST", path, request).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Response> {
        let request = self.client.put(self.url(path)).json(body);
        self.send("PUT", path, request).await
    }

    async fn delete(&self, path: &str) -> Result<Response> {
        let request = self.client.delete(self.url(path));
        self.send("DELETE", path, request).await
    }
}
