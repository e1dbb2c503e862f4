//! Route definitions for task lists.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::task_lists;
use crate::state::AppState;

/// Task list routes.
///
/// ```text
/// GET    /tasklists                   -> list_task_lists
/// POST   /tasklists                   -> create_task_list
/// GET    /tasklists/{id}/tasks        -> tasks_in_list   (?sortBy=&sortOrder=)
/// POST   /tasklists/{id}/updateOrder  -> update_order
/// DELETE /tasklists/{id}              -> delete_task_list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/tasklists",
            get(task_lists::list_task_lists).post(task_lists::create_task_list),
        )
        .route("/tasklists/{id}/tasks", get(task_lists::tasks_in_list))
        .route(
            "/tasklists/{id}/updateOrder",
            post(task_lists::update_order),
        )
        .route("/tasklists/{id}", delete(task_lists::delete_task_list))
}
