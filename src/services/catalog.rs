//! Catalog Service
//!
//! HTTP access to the remote artwork catalog: a paginated, read-only
//! collection endpoint addressed by a 1-based page index and a page size.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::config::CatalogConfig;
use crate::domain::artwork::{Artwork, ArtworkPage};
use crate::error::Result;

/// Abstraction over the paginated catalog endpoint.
///
/// The controller talks to this trait so it can be driven without a
/// network; [`CatalogClient`] is the production implementation.
pub trait PageFetcher: Send + Sync {
    /// Fetch the `page`-th block (1-based) of `page_size` records.
    ///
    /// Fails with `Error::Network` on transport failure and `Error::Decode`
    /// when the response cannot be parsed. Never retried internally.
    fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<ArtworkPage>> + Send;
}

/// Wire shape of the collection endpoint:
/// `{ "data": [...], "pagination": { "total": n, ... } }`
#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    data: Vec<Artwork>,
    pagination: CatalogPagination,
}

#[derive(Debug, Deserialize)]
struct CatalogPagination {
    total: u64,
}

fn decode_page(body: &[u8]) -> Result<ArtworkPage> {
    let envelope: CatalogEnvelope = serde_json::from_slice(body)?;
    Ok(ArtworkPage {
        records: envelope.data,
        total_records: envelope.pagination.total,
    })
}

/// reqwest-backed catalog client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client from endpoint configuration
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    async fn get_page(&self, page: u32, page_size: u32) -> Result<ArtworkPage> {
        debug!("fetching catalog page {} (limit {})", page, page_size);
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("page", page), ("limit", page_size)])
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        decode_page(&body)
    }
}

impl PageFetcher for CatalogClient {
    fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<ArtworkPage>> + Send {
        self.get_page(page, page_size)
    }
}
