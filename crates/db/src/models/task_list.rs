//! Task list model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::types::{DbId, Timestamp};

/// A row from the `task_lists` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task list.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTaskList {
    /// Defaults to empty when absent so the missing-name case reaches
    /// validation (400) instead of failing JSON extraction.
    #[serde(default)]
    pub name: String,
}
