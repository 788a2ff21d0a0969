//! BSON document shape of a stored post.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use blog_core::domain::{DEFAULT_IMAGE_URL, Post, PostId};
use blog_core::error::RepoError;

/// A post as stored in the `blogposts` collection.
///
/// Field names match documents written by earlier deployments; unknown fields
/// such as `__v` are ignored on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub summary: String,
    pub content: String,
    #[serde(rename = "imageUrl", default = "default_image_url")]
    pub image_url: String,
    pub date: bson::DateTime,
}

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

impl PostDocument {
    pub fn from_post(id: ObjectId, post: &Post) -> Self {
        Self {
            id,
            title: post.title.clone(),
            summary: post.summary.clone(),
            content: post.content.clone(),
            image_url: post.image_url.clone(),
            date: bson::DateTime::from_millis(post.date.timestamp_millis()),
        }
    }
}

/// Conversion from stored document to domain Post.
impl TryFrom<PostDocument> for Post {
    type Error = RepoError;

    fn try_from(doc: PostDocument) -> Result<Self, Self::Error> {
        let millis = doc.date.timestamp_millis();
        let date = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            RepoError::Serialization(format!("post {} has out-of-range date {millis}", doc.id))
        })?;

        Ok(Self {
            id: PostId::new(doc.id.to_hex()),
            title: doc.title,
            summary: doc.summary,
            content: doc.content,
            image_url: doc.image_url,
            date,
        })
    }
}
