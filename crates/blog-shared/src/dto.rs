//! Data Transfer Objects - request/response types for the API.
//!
//! Field names follow the JSON the frontend already consumes (`_id`, `imageUrl`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Request to create a post. Required fields are checked by the domain layer,
/// so everything is optional here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    /// RFC 3339, `YYYY-MM-DD` (midnight UTC) or epoch milliseconds.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateInput {
    Millis(i64),
    Text(String),
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(input) = Option::<DateInput>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let date = match input {
        DateInput::Millis(ms) => DateTime::from_timestamp_millis(ms),
        DateInput::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|d| d.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(&text, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|d| d.and_utc())
            }),
    };

    date.map(Some)
        .ok_or_else(|| de::Error::custom("invalid date"))
}

/// A stored post as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image_url: String,
    pub date: DateTime<Utc>,
}

/// Optional paging for `GET /api/posts`. Omitting both returns every post.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
