use crate::infrastructure::db::DbPool;
use crate::{
    domain::post::{BlogPost, NewBlogPost},
    error::AppResult,
};
use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};
use std::sync::Arc;
use uuid::Uuid;

/// Each row of a bulk insert binds id, author, title, content and created_at
const BINDS_PER_ROW: usize = 5;

/// Postgres caps a single statement at `u16::MAX` bind parameters
pub const MAX_ROWS_PER_INSERT: usize = u16::MAX as usize / BINDS_PER_ROW;

pub struct BlogPostRepository {
    pool: Arc<DbPool>,
}

impl BlogPostRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Get all posts, newest first
    pub async fn find_all(&self) -> AppResult<Vec<BlogPost>> {
        let pool = self.pool.as_ref();
        let posts = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, author, title, content, created_at
            FROM blog_posts
            ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(posts)
    }

    /// Get any single post
    pub async fn find_one(&self) -> AppResult<Option<BlogPost>> {
        let pool = self.pool.as_ref();
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, author, title, content, created_at
            FROM blog_posts
            LIMIT 1
            "#,
        )
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// Get a post by ID
    pub async fn find_by_id(&self, post_id: Uuid) -> AppResult<Option<BlogPost>> {
        let pool = self.pool.as_ref();
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, author, title, content, created_at
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let pool = self.pool.as_ref();
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Create a new post, the ID is assigned here
    pub async fn create(&self, post: &NewBlogPost) -> AppResult<BlogPost> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let created = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (id, author, title, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, author, title, content, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Json(&post.author))
        .bind(&post.title)
        .bind(&post.content)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }

    /// Insert many posts atomically, in as few statements as the bind limit allows
    pub async fn insert_many(&self, posts: &[NewBlogPost]) -> AppResult<Vec<BlogPost>> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let now = chrono::Utc::now();
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(posts.len());

        for chunk in posts.chunks(MAX_ROWS_PER_INSERT) {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO blog_posts (id, author, title, content, created_at) ",
            );
            builder.push_values(chunk, |mut row, post| {
                row.push_bind(Uuid::new_v4())
                    .push_bind(Json(post.author.clone()))
                    .push_bind(post.title.clone())
                    .push_bind(post.content.clone())
                    .push_bind(now);
            });
            builder.push(" RETURNING id, author, title, content, created_at");

            let rows = builder
                .build_query_as::<BlogPost>()
                .fetch_all(&mut *tx)
                .await?;
            inserted.extend(rows);
        }

        tx.commit().await?;

        Ok(inserted)
    }

    /// Persist the mutable fields of a post (author, title, content)
    pub async fn update(&self, post: &BlogPost) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            UPDATE blog_posts
            SET author = $1, title = $2, content = $3
            WHERE id = $4
            "#,
        )
        .bind(&post.author)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a post
    pub async fn delete(&self, post_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove every post, returns how many were removed
    pub async fn delete_all(&self) -> AppResult<u64> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM blog_posts").execute(pool).await?;

        Ok(result.rows_affected())
    }
}
