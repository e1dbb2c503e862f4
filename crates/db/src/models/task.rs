//! Task model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::types::{DbId, Timestamp};

/// A row from the `tasks` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub order_index: i32,
    pub task_list_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    /// Defaults to empty when absent so the missing-title case reaches
    /// validation (400) instead of failing JSON extraction.
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `"pending"` when absent.
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub task_list_id: Option<DbId>,
    /// Defaults to `0` when absent.
    pub order_index: Option<i32>,
}

/// DTO for updating a task. Absent fields keep their current values;
/// `task_list_id` is not updatable (tasks are not moved between lists here).
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub order_index: Option<i32>,
}

/// One entry of a reorder batch: the task to move and its new position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOrderUpdate {
    pub id: DbId,
    pub order_index: i32,
}
