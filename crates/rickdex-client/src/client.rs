//! HTTP client for the characters query.
//!
//! Successful pages are cached in memory per request descriptor, so going
//! back to a page that was already seen does not hit the network again.
//! Entries are never evicted; the cache lives as long as the page session
//! and [`CharacterClient::clear_cache`] is the only way to empty it.

use std::sync::Arc;

use gloo_net::http::Request;
use rickdex_core::{CharacterPage, RequestDescriptor};
use scc::HashMap;

use crate::{
    config::ClientConfig,
    error::{ClientError, Result},
    query::{GraphQlRequest, decode_response},
};

/// Client for the characters GraphQL endpoint.
#[derive(Clone)]
pub struct CharacterClient {
    /// GraphQL endpoint URL.
    endpoint: Arc<str>,

    /// Cache of successful responses: request -> page.
    cache: Arc<HashMap<RequestDescriptor, CharacterPage>>,
}

impl CharacterClient {
    /// Create a client for the configured endpoint.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoint: Arc::from(config.endpoint.as_str()),
            cache: Arc::new(HashMap::new()),
        }
    }

    /// Endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one page of characters, using the cache if available.
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<CharacterPage> {
        if let Some(entry) = self.cache.get_async(request).await {
            log::debug!("cache hit for page {}", request.page);
            return Ok(entry.get().clone());
        }

        let body = GraphQlRequest::characters(request);
        let response = Request::post(&self.endpoint).json(&body)?.send().await?;

        if !response.ok() {
            return Err(ClientError::Status(response.status()));
        }

        let text = response.text().await?;
        let page = decode_response(&text)?;

        log::debug!(
            "fetched page {} of {} ({} results)",
            request.page,
            page.total_pages,
            page.results.len()
        );

        self.remember(request.clone(), page.clone());

        Ok(page)
    }

    /// Cache a successful page. Returns `false` when the request was
    /// already cached, in which case the earlier page is kept.
    fn remember(&self, request: RequestDescriptor, page: CharacterPage) -> bool {
        match self.cache.insert_sync(request, page) {
            Ok(()) => true,
            Err((request, _)) => {
                log::debug!("page {} already cached, keeping first answer", request.page);
                false
            }
        }
    }

    /// Number of cached pages.
    pub fn cached_page_count(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached page.
    pub fn clear_cache(&self) {
        self.cache.clear_sync();
    }
}
