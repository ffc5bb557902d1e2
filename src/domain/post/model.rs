use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Post author as stored: structured first/last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The single-string form exposed by the API: `"<first> <last>"`, trimmed.
    ///
    /// This is the only place where the structured author is flattened.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Json<Author>,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A post that has not been persisted yet; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}
