//! HTTP implementation of [`CatalogProvider`].
//!
//! # Security Note - Logging
//!
//! The shared secret is held in a [`SecretString`] and never formatted. The
//! derived `X-Auth` value is wrapped in [`AuthToken`], which redacts itself in
//! `Display` and `Debug`, so enabling `CATALOG_LOG=reqwest=debug` does not leak
//! it through our own logging.

use std::fmt;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{Config, Endpoint};
use crate::error::Result;
use crate::types::{Product, ProductId};

use super::auth::{AUTH_HEADER, AuthToken};
use super::wire::{RpcRequest, RpcResponse};
use super::{ApiError, ApiResult, CatalogProvider};

/// Catalog API client
pub struct CatalogClient {
    client: Client,
    url: Url,
    secret: SecretString,
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("url", &self.url.as_str())
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl CatalogClient {
    /// Create a client from the loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.endpoint()?)
    }

    /// Create a client for a resolved endpoint.
    ///
    /// No request timeout is applied unless the endpoint carries one.
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = endpoint.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            url: endpoint.url,
            secret: SecretString::from(endpoint.secret),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// POST one request and unwrap the `result` field
    async fn call<T>(&self, request: RpcRequest<'_>) -> ApiResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let action = request.action();
        // Recomputed per request: the token depends on today's date
        let token = AuthToken::today(self.secret.expose_secret());
        let auth_value = token
            .as_header_value()
            .map_err(|e| ApiError::new(e.to_string(), action))?;

        tracing::debug!(action, url = %self.url, "sending catalog request");

        let response = self
            .client
            .post(self.url.clone())
            .header(AUTH_HEADER, auth_value)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(e, action))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                ApiError::with_status(format!("HTTP {}", status), action, status).with_body(&body),
            );
        }

        let envelope: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| ApiError::from_reqwest(e, action))?;

        Ok(envelope.result)
    }
}

impl CatalogProvider for CatalogClient {
    async fn list_ids(&self, offset: usize, limit: usize) -> ApiResult<Vec<ProductId>> {
        self.call(RpcRequest::GetIds { offset, limit }).await
    }

    async fn get_items(&self, ids: &[ProductId]) -> ApiResult<Vec<Product>> {
        self.call(RpcRequest::GetItems { ids }).await
    }
}
