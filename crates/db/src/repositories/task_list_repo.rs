//! Repository for the `task_lists` table.

use sqlx::PgPool;
use taskdeck_core::types::DbId;

use crate::models::task_list::{CreateTaskList, TaskList};

/// Column list for task_lists queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for task lists.
pub struct TaskListRepo;

impl TaskListRepo {
    /// List all task lists. No ordering is guaranteed.
    pub async fn list(pool: &PgPool) -> Result<Vec<TaskList>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_lists");
        sqlx::query_as::<_, TaskList>(&query).fetch_all(pool).await
    }

    /// Find a task list by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TaskList>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_lists WHERE id = $1");
        sqlx::query_as::<_, TaskList>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new task list, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTaskList) -> Result<TaskList, sqlx::Error> {
        let query = format!(
            "INSERT INTO task_lists (name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskList>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Delete a task list together with every task that references it, as
    /// one atomic unit.
    ///
    /// Runs in a transaction: tasks first, then the list. If the list does
    /// not exist the transaction is dropped uncommitted, rolling back the
    /// tasks delete, and `false` is returned with nothing modified.
    pub async fn delete_with_tasks(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM tasks WHERE task_list_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM task_lists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // List absent: dropping tx rolls back the tasks delete.
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
