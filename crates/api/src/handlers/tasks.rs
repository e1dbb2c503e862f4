//! Handlers for task CRUD and sorted listings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use taskdeck_core::error::CoreError;
use taskdeck_core::ordering::{SortDirection, TaskSortField};
use taskdeck_core::task;
use taskdeck_core::types::DbId;
use taskdeck_db::models::task::{CreateTask, Task, UpdateTask};
use taskdeck_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::query::TaskSortParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a task exists, returning the full row.
async fn ensure_task_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Task> {
    TaskRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound { entity: "Task", id })
    })
}

// ---------------------------------------------------------------------------
// GET /tasks
// ---------------------------------------------------------------------------

/// List all tasks, sorted by a whitelisted field.
///
/// Non-whitelisted `sortBy` values fall back to `createdAt`; the direction
/// defaults to ascending unless `order=DESC` (any case) is given.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskSortParams>,
) -> AppResult<impl IntoResponse> {
    let field = TaskSortField::parse_or(params.sort_by.as_deref(), TaskSortField::CreatedAt);
    let direction = SortDirection::parse_or_asc(params.order.as_deref());

    let tasks = TaskRepo::list(&state.pool, field, direction).await?;
    tracing::debug!(count = tasks.len(), "Listed tasks");
    Ok(Json(tasks))
}

// ---------------------------------------------------------------------------
// GET /tasks/{id}
// ---------------------------------------------------------------------------

/// Get a single task by ID.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = ensure_task_exists(&state.pool, id).await?;
    Ok(Json(found))
}

// ---------------------------------------------------------------------------
// POST /tasks
// ---------------------------------------------------------------------------

/// Create a new task.
pub async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    task::validate_title(&input.title)?;
    task::validate_description(input.description.as_deref())?;

    let created = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, title = %created.title, "Task created");
    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// PUT /tasks/{id}
// ---------------------------------------------------------------------------

/// Update an existing task. Absent fields keep their current values.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        task::validate_title(title)?;
    }
    task::validate_description(input.description.as_deref())?;

    let updated = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    tracing::info!(id = updated.id, "Task updated");
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /tasks/{id}
// ---------------------------------------------------------------------------

/// Delete a task.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Task", id }));
    }
    tracing::info!(id, "Task deleted");
    Ok(StatusCode::NO_CONTENT)
}
