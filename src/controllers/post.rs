use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::post::{
    BlogPostResponse, CreatePostRequest, ListPostsResponse, UpdatePostRequest,
};
use crate::{
    domain::post::{PostService, PostServiceApi},
    error::AppResult,
};

pub struct PostController {
    post_service: Arc<PostService>,
}

impl PostController {
    pub fn new(post_service: Arc<PostService>) -> Self {
        Self { post_service }
    }

    /// GET /posts - List all posts
    pub async fn list_posts(
        State(controller): State<Arc<PostController>>,
    ) -> AppResult<Json<ListPostsResponse>> {
        let posts = controller.post_service.list_posts().await?;
        Ok(Json(ListPostsResponse { posts }))
    }

    /// GET /posts/{id} - Get a single post
    pub async fn get_post(
        State(controller): State<Arc<PostController>>,
        Path(post_id): Path<Uuid>,
    ) -> AppResult<Json<BlogPostResponse>> {
        let post = controller.post_service.get_post(post_id).await?;
        Ok(Json(post))
    }

    /// POST /posts - Create new post
    pub async fn create_post(
        State(controller): State<Arc<PostController>>,
        Json(request): Json<CreatePostRequest>,
    ) -> AppResult<(StatusCode, Json<BlogPostResponse>)> {
        let post = controller.post_service.create_post(request).await?;
        Ok((StatusCode::CREATED, Json(post)))
    }

    /// PUT /posts/{id} - Partially update a post
    pub async fn update_post(
        State(controller): State<Arc<PostController>>,
        Path(post_id): Path<Uuid>,
        Json(request): Json<UpdatePostRequest>,
    ) -> AppResult<StatusCode> {
        controller
            .post_service
            .update_post(post_id, request)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// DELETE /posts/{id} - Delete a post
    pub async fn delete_post(
        State(controller): State<Arc<PostController>>,
        Path(post_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.post_service.delete_post(post_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
