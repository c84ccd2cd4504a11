use std::time::Duration;

use async_trait::async_trait;
use bon::bon;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::error::{HarvestError, Result};
use crate::models::types::{FetchOutcome, ProductEntry, ProductIndex, ReportId};
use crate::services::filter::{classify_body, parse_json};
use crate::traits::lister::{ProductFetcher, ProductLister};

const ACCEPT_LD_JSON: &str = "application/ld+json";

/// HTTP client for the product listing and the individual products behind it.
pub struct LsrCrawler {
    client: Client,
    list_url: String,
    summary_marker: String,
}

#[bon]
impl LsrCrawler {
    #[builder]
    pub fn new(
        list_url: String,
        user_agent: String,
        timeout: Duration,
        summary_marker: String,
    ) -> Result<Self> {
        if summary_marker.is_empty() {
            return Err(HarvestError::Config("summary marker must not be empty".to_string()));
        }
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_LD_JSON));
        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| HarvestError::Config(format!("http client: {}", e)))?;
        Ok(Self { client, list_url, summary_marker })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let transport = |source: reqwest::Error| HarvestError::Transport { url: url.to_string(), source };
        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        debug!(%url, %status, "lsr: response status");
        if !status.is_success() {
            return Err(HarvestError::HttpStatus { url: url.to_string(), status });
        }
        let body = response.text().await.map_err(transport)?;
        debug!(%url, body_len = body.len(), "lsr: response body length");
        Ok(body)
    }
}

#[async_trait]
impl ProductLister for LsrCrawler {
    async fn list_products(&self) -> Result<Vec<ProductEntry>> {
        info!(url = %self.list_url, "lsr: fetch product listing");
        let text = self.get_text(&self.list_url).await?;
        let index: ProductIndex = parse_json(&self.list_url, &text, "@graph")?;
        info!(count = index.products.len(), "lsr: listing parsed");
        Ok(index.products)
    }
}

#[async_trait]
impl ProductFetcher for LsrCrawler {
    async fn fetch_product(&self, id: &ReportId) -> Result<FetchOutcome> {
        let url = Url::parse(id.as_str()).map_err(|source| HarvestError::InvalidUrl {
            id: id.to_string(),
            source,
        })?;
        let body = self.get_text(url.as_str()).await?;
        classify_body(id, &body, &self.summary_marker)
    }
}
