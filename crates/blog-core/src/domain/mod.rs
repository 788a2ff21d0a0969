//! Domain entities - the core business objects.

mod post;

pub use post::{DEFAULT_IMAGE_URL, NewPost, Post, PostDraft, PostId};
