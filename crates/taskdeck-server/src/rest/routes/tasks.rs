// rest/routes/tasks.rs — Task REST routes.
//
// 400/404/500 への変換は envelope::ApiError に集約。ここでは
// 「パスの id を TaskId にパースする」「ボディを spec にパースする」
// 以外のことをしない。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;
use taskdeck_core::domain::{FieldError, StatusPatch, TaskId, TaskSpec, TaskStatus};
use tracing::info;

use crate::AppContext;
use crate::rest::envelope::{self, ApiError, parse_body};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    status: Option<String>,
}

/// `?status=pending|done` フィルタ。その他の値は 400。
fn parse_status_filter(status: Option<&str>) -> Result<Option<TaskStatus>, ApiError> {
    match status {
        None => Ok(None),
        Some("pending") => Ok(Some(TaskStatus::Pending)),
        Some("done") => Ok(Some(TaskStatus::Done)),
        Some(_) => Err(ApiError::validation(&[FieldError::new(
            "status",
            "Status filter must be 'pending' or 'done'",
        )])),
    }
}

fn parse_task_id(id: &str) -> Result<TaskId, ApiError> {
    id.parse().map_err(|_| ApiError::invalid_id())
}

pub async fn list_tasks(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<ListQuery>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let status = parse_status_filter(query.status.as_deref())?;
    let tasks = ctx.service.list(status).await;
    Ok(envelope::ok(tasks))
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let spec: TaskSpec = parse_body(body)?;
    let task = ctx.service.create(spec).await?;

    info!(id = %task.id, "task created");
    Ok(envelope::created(task))
}

pub async fn update_task_status(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let id = parse_task_id(&id)?;
    let patch: StatusPatch = parse_body(body)?;
    let task = ctx.service.update_status(id, patch).await?;

    info!(id = %task.id, status = ?task.status, "task status updated");
    Ok(envelope::ok(task))
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let id = parse_task_id(&id)?;
    ctx.service.delete(id).await?;

    info!(%id, "task deleted");
    Ok(envelope::ok_message("Task deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_parses_known_values() {
        assert_eq!(parse_status_filter(None).unwrap(), None);
        assert_eq!(
            parse_status_filter(Some("pending")).unwrap(),
            Some(TaskStatus::Pending)
        );
        assert_eq!(
            parse_status_filter(Some("done")).unwrap(),
            Some(TaskStatus::Done)
        );
    }

    #[test]
    fn status_filter_rejects_unknown_values() {
        let err = parse_status_filter(Some("archived")).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn task_id_parse_rejects_non_uuid() {
        let err = parse_task_id("not-a-uuid").unwrap_err();
        assert_eq!(err, ApiError::invalid_id());
    }
}
