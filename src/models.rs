//! Value records produced by [`FeedParser`](crate::FeedParser).
//!
//! Every text leaf that is empty in the feed is `None` here, never `""`.

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub name: Option<String>,
    pub place: Option<String>,
}

/// One rated survey question.
///
/// Used both for a reviewer's own answers and for the company-wide averages.
/// The score stays textual so the feed's formatting ("8", "8.0", "7,5") is kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: Option<String>,
    pub title: Option<String>,
    pub score: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: Option<String>,
    pub customer: Customer,
    pub date: Option<NaiveDateTime>,
    pub total_score: Option<String>,
    pub questions: Vec<Question>,
    pub recommended: Option<String>,
    pub pros: Option<String>,
    pub cons: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: Option<u64>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageScores {
    pub questions: Vec<Question>,
    pub review_amount: Option<u64>,
}

/// Company summary. `id` is the caller's company code, not a feed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
    pub id: u64,
    pub name: Option<String>,
    pub url: Option<String>,
    pub category: Category,
    pub total_score: Option<f64>,
    pub average_scores: AverageScores,
    pub total_reviews: Option<u64>,
    pub total_views: Option<u64>,
}
