// Client library for the Kiyoh recent_company_reviews XML feed

pub mod client;
pub mod config;
pub mod error;
pub mod feed_parser;
pub mod fetcher;
pub mod models;
pub mod xml_response;

// Re-export key types for convenience
pub use client::Kiyoh;
pub use config::ClientConfig;
pub use error::{FeedError, Result};
pub use feed_parser::{text_or_absent, FeedParser};
pub use fetcher::{
    build_feed_url, Fetcher, HttpFetcher, DEFAULT_PAGE, RECENT_COMPANY_REVIEWS_URL,
};
pub use models::{AverageScores, Category, Company, Customer, Question, Review};
