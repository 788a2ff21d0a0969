use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Image shown for posts created without an explicit `image_url`.
pub const DEFAULT_IMAGE_URL: &str = "./assets/images/blog/blog-placeholder.jpg";

/// Opaque post identifier. Its format is owned by the store that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post entity - a persisted blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image_url: String,
    pub date: DateTime<Utc>,
}

/// Post fields as submitted by a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl PostDraft {
    /// Check required fields and fill in defaults.
    ///
    /// `title`, `summary` and `content` must be present and not blank.
    /// A missing `image_url` becomes [`DEFAULT_IMAGE_URL`], a missing `date` becomes now.
    pub fn validate(self) -> Result<NewPost, DomainError> {
        let title = required("title", self.title)?;
        let summary = required("summary", self.summary)?;
        let content = required("content", self.content)?;

        Ok(NewPost {
            title,
            summary,
            content,
            image_url: self
                .image_url
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            date: self.date.unwrap_or_else(Utc::now),
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(DomainError::Validation(format!("{field} must not be blank"))),
        None => Err(DomainError::Validation(format!("{field} is required"))),
    }
}

/// A validated post that has not been assigned an id yet.
///
/// Only obtainable through [`PostDraft::validate`], so stores never see a post
/// with missing required fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    title: String,
    summary: String,
    content: String,
    image_url: String,
    date: DateTime<Utc>,
}

impl NewPost {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Attach the store-issued id.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            summary: self.summary,
            content: self.content,
            image_url: self.image_url,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> PostDraft {
        PostDraft {
            title: Some("A".to_string()),
            summary: Some("B".to_string()),
            content: Some("C".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_applies_defaults() {
        let before = Utc::now();
        let post = draft().validate().unwrap().into_post(PostId::new("p1"));

        assert_eq!(post.id.as_str(), "p1");
        assert_eq!(post.title, "A");
        assert_eq!(post.summary, "B");
        assert_eq!(post.content, "C");
        assert_eq!(post.image_url, DEFAULT_IMAGE_URL);
        assert!(post.date >= before);
    }

    #[test]
    fn test_validate_keeps_supplied_optionals() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let new_post = PostDraft {
            image_url: Some("/img/cover.png".to_string()),
            date: Some(date),
            ..draft()
        }
        .validate()
        .unwrap();

        assert_eq!(new_post.date(), date);
        assert_eq!(
            new_post.into_post(PostId::new("p2")).image_url,
            "/img/cover.png"
        );
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        for draft in [
            PostDraft {
                title: None,
                ..draft()
            },
            PostDraft {
                summary: None,
                ..draft()
            },
            PostDraft {
                content: None,
                ..draft()
            },
        ] {
            assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let draft = PostDraft {
            content: Some("   ".to_string()),
            ..draft()
        };

        match draft.validate() {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("content")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
