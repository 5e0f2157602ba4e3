// Public facade: fetch a feed page and apply one of the two projections
use tracing::info;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::feed_parser::FeedParser;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::models::{Company, Review};

/// Client for the Kiyoh recent_company_reviews feed.
///
/// Holds the connector identity and a reusable fetcher. Every operation does
/// exactly one fetch; nothing is cached or retried.
#[derive(Debug)]
pub struct Kiyoh<F: Fetcher = HttpFetcher> {
    config: ClientConfig,
    fetcher: F,
    parser: FeedParser,
}

impl Kiyoh<HttpFetcher> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::from_config(&config)?;
        info!(
            company_code = config.company_code,
            endpoint = %config.endpoint,
            "created feed client"
        );
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: Fetcher> Kiyoh<F> {
    pub fn with_fetcher(config: ClientConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            parser: FeedParser::new(),
        }
    }

    /// Reviews on the given feed page (page 1 when `None`), newest first as served.
    pub fn get_reviews(&self, page: Option<u32>) -> Result<Vec<Review>> {
        let content = self.get_content(page)?;
        self.parser.parse_reviews(&content)
    }

    /// Company info, category and (average) scores, read from the first page.
    pub fn get_company(&self) -> Result<Company> {
        let content = self.get_content(None)?;
        self.parser.parse_company(&content, self.config.company_code)
    }

    /// Raw feed text for a page.
    pub fn get_content(&self, page: Option<u32>) -> Result<String> {
        self.fetcher.fetch(&self.recent_company_reviews_url(page))
    }

    pub fn recent_company_reviews_url(&self, page: Option<u32>) -> String {
        self.config.feed_url(page)
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
