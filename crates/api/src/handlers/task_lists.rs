//! Handlers for task lists: CRUD, scoped task listings, and batch reorder.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use taskdeck_core::error::CoreError;
use taskdeck_core::ordering::{SortDirection, TaskSortField};
use taskdeck_core::task;
use taskdeck_core::types::DbId;
use taskdeck_db::models::task::TaskOrderUpdate;
use taskdeck_db::models::task_list::CreateTaskList;
use taskdeck_db::repositories::{TaskListRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::query::ScopedTaskSortParams;
use crate::state::AppState;

/// Response payload for a reorder batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderResult {
    /// Number of rows whose `orderIndex` was actually written.
    pub updated: u64,
}

// ---------------------------------------------------------------------------
// GET /tasklists
// ---------------------------------------------------------------------------

/// List all task lists. No ordering is guaranteed.
pub async fn list_task_lists(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let lists = TaskListRepo::list(&state.pool).await?;
    tracing::debug!(count = lists.len(), "Listed task lists");
    Ok(Json(lists))
}

// ---------------------------------------------------------------------------
// POST /tasklists
// ---------------------------------------------------------------------------

/// Create a new task list.
pub async fn create_task_list(
    State(state): State<AppState>,
    Json(input): Json<CreateTaskList>,
) -> AppResult<impl IntoResponse> {
    task::validate_list_name(&input.name)?;

    let created = TaskListRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Task list created");
    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /tasklists/{id}/tasks
// ---------------------------------------------------------------------------

/// List the tasks of one task list.
///
/// Defaults to the manual ordering (`custom`, i.e. `orderIndex` ascending).
/// An unknown list yields an empty array, not a 404.
pub async fn tasks_in_list(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ScopedTaskSortParams>,
) -> AppResult<impl IntoResponse> {
    let field = TaskSortField::parse_or(params.sort_by.as_deref(), TaskSortField::Custom);
    let direction = SortDirection::parse_or_asc(params.sort_order.as_deref());

    let tasks = TaskRepo::list_by_list(&state.pool, id, field, direction).await?;
    tracing::debug!(task_list_id = id, count = tasks.len(), "Listed tasks in list");
    Ok(Json(tasks))
}

// ---------------------------------------------------------------------------
// POST /tasklists/{id}/updateOrder
// ---------------------------------------------------------------------------

/// Apply a batch of `orderIndex` updates to the tasks of one list.
///
/// The batch is applied in a single transaction; entries referencing tasks
/// outside the list (or nonexistent tasks) are silently skipped.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(batch): Json<Vec<TaskOrderUpdate>>,
) -> AppResult<impl IntoResponse> {
    let updated = TaskRepo::reorder(&state.pool, id, &batch).await?;
    tracing::info!(
        task_list_id = id,
        batch_len = batch.len(),
        updated,
        "Reordered tasks"
    );
    Ok(Json(ReorderResult { updated }))
}

// ---------------------------------------------------------------------------
// DELETE /tasklists/{id}
// ---------------------------------------------------------------------------

/// Delete a task list and every task referencing it, atomically.
pub async fn delete_task_list(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TaskListRepo::delete_with_tasks(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TaskList",
            id,
        }));
    }
    tracing::info!(id, "Task list and its tasks deleted");
    Ok(StatusCode::NO_CONTENT)
}
