//! HTTP client for the store API.
//!
//! A fetch is all-or-nothing: the three collections are requested one after
//! another and the first failure aborts the whole attempt.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::constants::collections;
use crate::models::Dataset;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request for {collection} failed: {source}")]
    Request {
        collection: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Store API returned {status} for {collection}: {body}")]
    Status {
        collection: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Invalid {collection} payload: {source}")]
    Decode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    #[must_use]
    pub const fn collection(&self) -> Option<&'static str> {
        match self {
            Self::Client(_) => None,
            Self::Request { collection, .. }
            | Self::Status { collection, .. }
            | Self::Decode { collection, .. } => Some(*collection),
        }
    }
}

/// Anything that can produce a complete [`Dataset`] or fail as a whole.
#[async_trait::async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Dataset, FetchError>;
}

#[derive(Clone)]
pub struct StoreApiClient {
    client: Client,
    base_url: String,
}

impl StoreApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        collection: &'static str,
    ) -> Result<Vec<T>, FetchError> {
        info!("Fetching {} from store API...", collection);

        let url = format!("{}/{}", self.base_url, collection);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request { collection, source })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                collection,
                status,
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request { collection, source })?;

        let items: Vec<T> = serde_json::from_slice(&body)
            .map_err(|source| FetchError::Decode { collection, source })?;

        info!("Retrieved {} {}", items.len(), collection);
        Ok(items)
    }
}

#[async_trait::async_trait]
impl DatasetSource for StoreApiClient {
    async fn fetch(&self) -> Result<Dataset, FetchError> {
        let products = self.get_collection(collections::PRODUCTS).await?;
        let users = self.get_collection(collections::USERS).await?;
        let carts = self.get_collection(collections::CARTS).await?;

        Ok(Dataset {
            products,
            users,
            carts,
        })
    }
}
