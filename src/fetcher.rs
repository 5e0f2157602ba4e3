// Retrieval of the raw recent_company_reviews feed over HTTP
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::{FeedError, Result};

pub const RECENT_COMPANY_REVIEWS_URL: &str =
    "https://www.kiyoh.nl/xml/recent_company_reviews.xml";

pub const DEFAULT_PAGE: u32 = 1;

/// Formats the feed URL for the public Kiyoh endpoint.
///
/// Values are substituted as given; callers pass URL-safe codes.
pub fn build_feed_url(connector_code: &str, company_code: u64, page: Option<u32>) -> String {
    feed_url(RECENT_COMPANY_REVIEWS_URL, connector_code, company_code, page)
}

/// Same as [`build_feed_url`] against an arbitrary endpoint.
pub fn feed_url(
    endpoint: &str,
    connector_code: &str,
    company_code: u64,
    page: Option<u32>,
) -> String {
    format!(
        "{}?connectorcode={}&company_id={}&page={}",
        endpoint,
        connector_code,
        company_code,
        page.unwrap_or(DEFAULT_PAGE)
    )
}

/// Source of raw feed text.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FeedError::InitError(e.to_string()))?;
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = url, "fetching feed");

        let response = self.client.get(url).send().map_err(|e| {
            error!(url = url, error = %e, "feed request failed");
            FeedError::NetworkError {
                url: url.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        debug!(url = url, status = status.as_u16(), "feed response received");

        if !status.is_success() {
            error!(url = url, status = status.as_u16(), "feed request rejected");
            return Err(FeedError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().map_err(|e| FeedError::NetworkError {
            url: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
pub(crate) mod stub_server {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    // Serves one canned HTTP response and hands back the request line it saw
    pub fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut buffer).unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/xml; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            // the client may hang up early on error statuses
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (address, handle)
    }
}
