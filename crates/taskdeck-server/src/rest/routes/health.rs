use std::sync::Arc;

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::AppContext;

pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let uptime = ctx.started_at.elapsed().as_secs();
    let counts = ctx.service.counts().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": uptime,
        "tasks": counts,
    }))
}
