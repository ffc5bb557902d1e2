use super::error::PostServiceError;
use crate::domain::post::{
    Author, AuthorRequest, BlogPost, BlogPostResponse, CreatePostRequest, NewBlogPost,
    UpdatePostRequest,
};
use crate::infrastructure::repositories::BlogPostRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct PostService {
    post_repo: Arc<BlogPostRepository>,
}

impl PostService {
    pub fn new(post_repo: Arc<BlogPostRepository>) -> Self {
        Self { post_repo }
    }
}

#[async_trait]
pub trait PostServiceApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<BlogPostResponse>, PostServiceError>;

    async fn get_post(&self, post_id: Uuid) -> Result<BlogPostResponse, PostServiceError>;

    async fn create_post(
        &self,
        request: CreatePostRequest,
    ) -> Result<BlogPostResponse, PostServiceError>;

    async fn update_post(
        &self,
        post_id: Uuid,
        request: UpdatePostRequest,
    ) -> Result<(), PostServiceError>;

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostServiceError>;
}

#[async_trait]
impl PostServiceApi for PostService {
    async fn list_posts(&self) -> Result<Vec<BlogPostResponse>, PostServiceError> {
        let posts = self.post_repo.find_all().await?;
        Ok(posts.into_iter().map(BlogPostResponse::from).collect())
    }

    async fn get_post(&self, post_id: Uuid) -> Result<BlogPostResponse, PostServiceError> {
        let post = self.find_post(post_id).await?;
        Ok(BlogPostResponse::from(post))
    }

    async fn create_post(
        &self,
        request: CreatePostRequest,
    ) -> Result<BlogPostResponse, PostServiceError> {
        let new_post = validate_new_post(request)?;

        let post = self.post_repo.create(&new_post).await?;

        tracing::info!(post_id = %post.id, "Blog post created");
        Ok(BlogPostResponse::from(post))
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        request: UpdatePostRequest,
    ) -> Result<(), PostServiceError> {
        check_body_id(post_id, request.id.as_deref())?;

        let mut post = self.find_post(post_id).await?;
        apply_update(&mut post, request)?;

        let updated = self.post_repo.update(&post).await?;

        // Deleted between the read and the write
        if !updated {
            return Err(PostServiceError::NotFound);
        }

        tracing::info!(post_id = %post_id, "Blog post updated");
        Ok(())
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostServiceError> {
        let deleted = self.post_repo.delete(post_id).await?;

        if !deleted {
            return Err(PostServiceError::NotFound);
        }

        tracing::info!(post_id = %post_id, "Blog post deleted");
        Ok(())
    }
}

impl PostService {
    async fn find_post(&self, post_id: Uuid) -> Result<BlogPost, PostServiceError> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostServiceError::NotFound)
    }
}

fn missing_field(field: &str) -> PostServiceError {
    PostServiceError::Invalid(format!("Missing `{}` in request body", field))
}

fn validate_title(title: &str) -> Result<(), PostServiceError> {
    if title.trim().is_empty() {
        return Err(PostServiceError::Invalid(
            "`title` must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Turn a create request into a storable post, rejecting missing or blank fields.
fn validate_new_post(request: CreatePostRequest) -> Result<NewBlogPost, PostServiceError> {
    let CreatePostRequest {
        author,
        title,
        content,
    } = request;

    let title = title.ok_or_else(|| missing_field("title"))?;
    let content = content.ok_or_else(|| missing_field("content"))?;
    let AuthorRequest {
        first_name,
        last_name,
    } = author.ok_or_else(|| missing_field("author"))?;

    let first_name = first_name.ok_or_else(|| missing_field("author.firstName"))?;
    let last_name = last_name.ok_or_else(|| missing_field("author.lastName"))?;

    validate_title(&title)?;

    Ok(NewBlogPost {
        author: Author {
            first_name,
            last_name,
        },
        title,
        content,
    })
}

fn check_body_id(path_id: Uuid, body_id: Option<&str>) -> Result<(), PostServiceError> {
    match body_id {
        Some(body_id) if Uuid::parse_str(body_id).ok() != Some(path_id) => {
            Err(PostServiceError::Invalid(format!(
                "Request path id ({}) and request body id ({}) must match",
                path_id, body_id
            )))
        }
        _ => Ok(()),
    }
}

/// Apply the supplied fields of a partial update; everything else is left as is.
fn apply_update(post: &mut BlogPost, request: UpdatePostRequest) -> Result<(), PostServiceError> {
    if let Some(title) = request.title {
        validate_title(&title)?;
        post.title = title;
    }

    if let Some(content) = request.content {
        post.content = content;
    }

    if let Some(author) = request.author {
        if let Some(first_name) = author.first_name {
            post.author.first_name = first_name;
        }
        if let Some(last_name) = author.last_name {
            post.author.last_name = last_name;
        }
    }

    Ok(())
}
