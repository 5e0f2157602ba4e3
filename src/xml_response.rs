use serde::Deserialize;

// Structures for XML deserialization of the recent_company_reviews feed.
// Leaves stay as raw text; conversion and normalization happen in feed_parser.
// The root element name varies, so the document struct is not renamed.
#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct XmlFeed {
    pub company: Vec<XmlCompany>,
    pub review_list: Vec<XmlReviewList>,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct XmlReviewList {
    pub review: Vec<XmlReview>,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct XmlReview {
    pub id: String,
    pub customer: Option<XmlCustomer>,
    #[serde(rename = "totalScore")]
    pub total_score: String,
    pub questions: XmlQuestions,
    pub recommended: String,
    pub positive: String,
    pub negative: String,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct XmlCustomer {
    pub name: String,
    pub place: String,
    pub date: String,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct XmlQuestions {
    pub question: Vec<XmlQuestion>,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct XmlQuestion {
    pub id: String,
    pub title: String,
    pub score: String,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct XmlCompany {
    pub name: String,
    pub url: String,
    pub category: Option<XmlCategory>,
    pub total_score: String,
    pub average_scores: Option<XmlAverageScores>,
    pub total_reviews: String,
    pub total_views: String,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct XmlCategory {
    pub id: String,
    pub title: String,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct XmlAverageScores {
    pub questions: XmlQuestions,
    pub review_amount: String,
}
