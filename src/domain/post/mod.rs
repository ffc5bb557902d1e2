pub mod error;
pub mod model;
pub mod service;

pub use error::PostServiceError;
pub use model::{Author, BlogPost, NewBlogPost};
pub use service::{PostService, PostServiceApi};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for post endpoints.
///
/// `author` is flattened to its display name, see [`Author::display_name`].
#[derive(Debug, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

/// Response for `GET /posts`
#[derive(Debug, Serialize, Deserialize)]
pub struct ListPostsResponse {
    pub posts: Vec<BlogPostResponse>,
}

/// Author as accepted in request bodies; fields are optional so that
/// missing names can be reported with a readable message.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request to create a new post
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<AuthorRequest>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Partial update; only supplied fields change.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub author: Option<AuthorRequest>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            author: post.author.display_name(),
            title: post.title,
            content: post.content,
            created: post.created_at,
        }
    }
}
