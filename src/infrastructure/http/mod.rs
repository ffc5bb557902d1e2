pub mod request_id;

use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tower_http::trace::TraceLayer;

use crate::controllers::{health, post::PostController};
use crate::domain::post::PostService;
use crate::infrastructure::config::Config;
use crate::infrastructure::db::{check_connection, create_pool, run_migrations, DbPool};
use crate::infrastructure::repositories::BlogPostRepository;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn build_router(pool: Arc<DbPool>, post_controller: Arc<PostController>) -> Router {
    let post_routes = Router::new()
        .route(
            "/posts",
            get(PostController::list_posts).post(PostController::create_post),
        )
        .route(
            "/posts/:id",
            get(PostController::get_post)
                .put(PostController::update_post)
                .delete(PostController::delete_post),
        )
        .with_state(post_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(post_routes)
        .fallback(health::not_found)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// A running HTTP server bound to a database.
///
/// Created by [`HttpServer::start`], released by [`HttpServer::stop`].
pub struct HttpServer {
    local_addr: SocketAddr,
    pool: Arc<DbPool>,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl HttpServer {
    /// Connect to the configured database, apply migrations and start
    /// listening. Returns once the socket is bound and accepting connections.
    pub async fn start(config: &Config) -> anyhow::Result<Self> {
        let pool = create_pool(config.database_target()).await?;
        tracing::info!("Database connection pool created");

        check_connection(&pool).await?;
        tracing::info!("Database connection verified");

        run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");

        let pool = Arc::new(pool);

        let post_repo = Arc::new(BlogPostRepository::new(pool.clone()));
        let post_service = Arc::new(PostService::new(post_repo));
        let post_controller = Arc::new(PostController::new(post_service));

        let app = build_router(pool.clone(), post_controller);

        let listener = TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", local_addr);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        Ok(Self {
            local_addr,
            pool,
            shutdown_tx,
            handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Gracefully stop serving and close the database pool.
    pub async fn stop(self) -> anyhow::Result<()> {
        // The server task may already be gone if it failed; the join below reports why.
        let _ = self.shutdown_tx.send(());
        self.handle.await??;

        self.pool.close().await;
        tracing::info!(addr = %self.local_addr, "Server stopped");

        Ok(())
    }
}
