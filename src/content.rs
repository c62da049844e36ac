//! Best-effort article text retrieval.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::errors::NotifierError;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

/// Anything that can turn an article URL into its text. `None` means "no usable content".
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<String>;
}

pub struct ContentFetcher {
    http: Client,
}

impl ContentFetcher {
    /// # Errors
    ///
    /// Returns `HttpError` if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, NotifierError> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    /// Fetcher whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if the underlying HTTP client cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self, NotifierError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let http = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    async fn fetch_html(&self, url: &str) -> Result<String, reqwest::Error> {
        self.http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait]
impl ContentSource for ContentFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        if !is_http_url(url) {
            warn!("Invalid URL: {}", url);
            return None;
        }

        match self.fetch_html(url).await {
            Ok(html) => {
                let text = extract_main_text(&html);
                if text.is_none() {
                    info!("No <main> region found at {}", url);
                }
                text
            }
            Err(e) => {
                warn!("Error accessing {}: {}", url, e);
                None
            }
        }
    }
}

#[must_use]
pub fn is_http_url(url: &str) -> bool {
    let lowered = url.trim_start().to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}

/// Text content of the first `<main>` element, if the document has one.
#[must_use]
pub fn extract_main_text(html: &str) -> Option<String> {
    let selector = Selector::parse("main").ok()?;
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .next()
        .map(|main| main.text().collect::<String>())
}
