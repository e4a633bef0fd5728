// rest/mod.rs — Public REST API server.
//
// Axum HTTP server; bridges REST calls to the TaskService.
//
// Endpoints:
//   GET    /api/tasks          (?status=pending|done)
//   POST   /api/tasks
//   PATCH  /api/tasks/{id}
//   DELETE /api/tasks/{id}
//   GET    /api/health
//   GET    /                   (single-page frontend)

pub mod envelope;
pub mod routes;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    response::Html,
    routing::{get, patch},
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

/// Embedded single-page frontend (list / create / toggle / delete + stats).
const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn serve(ctx: Arc<AppContext>, listener: TcpListener) -> Result<()> {
    let addr = listener.local_addr()?;
    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}

/// Frontend entry point (no envelope: plain HTML).
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        // Frontend
        .route("/", get(index))
        // Tasks
        .route(
            "/api/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/api/tasks/{id}",
            patch(routes::tasks::update_task_status).delete(routes::tasks::delete_task),
        )
        // Health
        .route("/api/health", get(routes::health::health))
        // ブラウザのフロントを同一サーバから配るので CORS は実質不要だが、
        // 開発中は vite 等の別ポートから叩けるよう permissive にしておく
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
