// Mapping of the recent_company_reviews XML feed into review and company records
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use quick_xml::de::{from_str, DeError};
use std::str::FromStr;
use tracing::debug;

use crate::error::{FeedError, Result};
use crate::models::{AverageScores, Category, Company, Customer, Question, Review};
use crate::xml_response::{XmlCompany, XmlFeed, XmlQuestion, XmlQuestions, XmlReview};

// Tried in order after RFC 3339
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Returns the text of a leaf, or `None` when the leaf is empty.
///
/// Every scalar read from the feed goes through this function, so an empty
/// element and a missing element both end up as `None`.
pub fn text_or_absent(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn number_or_absent<T: FromStr>(field: &'static str, text: String) -> Result<Option<T>> {
    let Some(value) = text_or_absent(text) else {
        return Ok(None);
    };
    match value.trim().parse() {
        Ok(number) => Ok(Some(number)),
        Err(_) => Err(FeedError::FormatError { field, value }),
    }
}

// NaN and infinities parse as f64 but are not scores
fn float_or_absent(field: &'static str, text: String) -> Result<Option<f64>> {
    let Some(value) = text_or_absent(text) else {
        return Ok(None);
    };
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(FeedError::FormatError { field, value }),
    }
}

fn date_or_absent(field: &'static str, text: String) -> Result<Option<NaiveDateTime>> {
    let Some(value) = text_or_absent(text) else {
        return Ok(None);
    };
    let trimmed = value.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(date_time.naive_local()));
    }
    for format in DATETIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Some(date_time));
        }
    }
    for format in DATE_FORMATS {
        if let Some(midnight) = NaiveDate::parse_from_str(trimmed, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(Some(midnight));
        }
    }

    Err(FeedError::DateFormatError { field, value })
}

// At most one node of a kind is allowed where the feed documents a single one
fn single_node<T>(nodes: Vec<T>, path: &str) -> Result<Option<T>> {
    if nodes.len() > 1 {
        return Err(FeedError::SchemaError(format!(
            "expected a single {} node, found {}",
            path,
            nodes.len()
        )));
    }
    Ok(nodes.into_iter().next())
}

impl From<XmlQuestion> for Question {
    fn from(item: XmlQuestion) -> Self {
        Question {
            id: text_or_absent(item.id),
            title: text_or_absent(item.title),
            score: text_or_absent(item.score),
        }
    }
}

fn questions_from_xml(item: XmlQuestions) -> Vec<Question> {
    item.question.into_iter().map(Question::from).collect()
}

impl TryFrom<XmlReview> for Review {
    type Error = FeedError;

    fn try_from(item: XmlReview) -> Result<Self> {
        let xml_customer = item
            .customer
            .ok_or_else(|| FeedError::SchemaError("missing review/customer node".to_string()))?;

        let date = date_or_absent("review/customer/date", xml_customer.date)?;
        let customer = Customer {
            name: text_or_absent(xml_customer.name),
            place: text_or_absent(xml_customer.place),
        };

        Ok(Review {
            id: text_or_absent(item.id),
            customer,
            date,
            total_score: text_or_absent(item.total_score),
            questions: questions_from_xml(item.questions),
            recommended: text_or_absent(item.recommended),
            pros: text_or_absent(item.positive),
            cons: text_or_absent(item.negative),
        })
    }
}

fn company_from_xml(item: XmlCompany, company_code: u64) -> Result<Company> {
    let xml_category = item
        .category
        .ok_or_else(|| FeedError::SchemaError("missing company/category node".to_string()))?;
    let xml_average_scores = item.average_scores.ok_or_else(|| {
        FeedError::SchemaError("missing company/average_scores node".to_string())
    })?;

    let category = Category {
        id: number_or_absent("company/category/id", xml_category.id)?,
        title: text_or_absent(xml_category.title),
    };
    let average_scores = AverageScores {
        questions: questions_from_xml(xml_average_scores.questions),
        review_amount: number_or_absent(
            "company/average_scores/review_amount",
            xml_average_scores.review_amount,
        )?,
    };

    Ok(Company {
        id: company_code,
        name: text_or_absent(item.name),
        url: text_or_absent(item.url),
        category,
        total_score: float_or_absent("company/total_score", item.total_score)?,
        average_scores,
        total_reviews: number_or_absent("company/total_reviews", item.total_reviews)?,
        total_views: number_or_absent("company/total_views", item.total_views)?,
    })
}

/// Maps raw feed text into records. Both projections read the same document.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeedParser;

impl FeedParser {
    pub fn new() -> Self {
        Self
    }

    // Broken markup is a parse error; well-formed XML of the wrong shape is a schema error
    fn parse_feed(&self, xml: &str) -> Result<XmlFeed> {
        from_str(xml).map_err(|e| match e {
            DeError::InvalidXml(_) | DeError::UnexpectedEof => {
                FeedError::XmlParseError(e.to_string())
            }
            other => FeedError::SchemaError(other.to_string()),
        })
    }

    /// Extracts every `review_list/review` entry in document order.
    ///
    /// A feed without reviews (or without a `review_list`) gives an empty vector.
    pub fn parse_reviews(&self, xml: &str) -> Result<Vec<Review>> {
        let feed = self.parse_feed(xml)?;

        let Some(review_list) = single_node(feed.review_list, "review_list")? else {
            debug!("feed contains no review_list node");
            return Ok(Vec::new());
        };

        let reviews = review_list
            .review
            .into_iter()
            .map(Review::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!(count = reviews.len(), "parsed reviews from feed");
        Ok(reviews)
    }

    /// Extracts the `company` summary. `company_code` becomes the company id.
    pub fn parse_company(&self, xml: &str, company_code: u64) -> Result<Company> {
        let feed = self.parse_feed(xml)?;

        let xml_company = single_node(feed.company, "company")?
            .ok_or_else(|| FeedError::SchemaError("missing company node".to_string()))?;

        let company = company_from_xml(xml_company, company_code)?;
        debug!(
            company_id = company.id,
            questions = company.average_scores.questions.len(),
            "parsed company summary from feed"
        );
        Ok(company)
    }
}
