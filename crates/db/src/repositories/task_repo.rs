//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskdeck_core::ordering::{order_by_clause, SortDirection, TaskSortField};
use taskdeck_core::task::STATUS_PENDING;
use taskdeck_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskOrderUpdate, UpdateTask};

/// Column list for tasks queries.
const COLUMNS: &str =
    "id, title, description, status, due_date, order_index, task_list_id, created_at, updated_at";

/// Provides CRUD and ordering operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List all tasks sorted by a whitelisted field.
    ///
    /// The ORDER BY fragment comes from [`order_by_clause`], which only ever
    /// emits fixed column names, so interpolating it is safe.
    pub async fn list(
        pool: &PgPool,
        field: TaskSortField,
        direction: SortDirection,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks ORDER BY {}",
            order_by_clause(field, direction)
        );
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List the tasks of one task list, sorted by a whitelisted field.
    ///
    /// An unknown list id yields an empty vec, not an error.
    pub async fn list_by_list(
        pool: &PgPool,
        task_list_id: DbId,
        field: TaskSortField,
        direction: SortDirection,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE task_list_id = $1 ORDER BY {}",
            order_by_clause(field, direction)
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(task_list_id)
            .fetch_all(pool)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description, status, due_date, order_index, task_list_id)
             VALUES ($1, $2, COALESCE($3, '{STATUS_PENDING}'), $4, COALESCE($5, 0), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.due_date)
            .bind(input.order_index)
            .bind(input.task_list_id)
            .fetch_one(pool)
            .await
    }

    /// Update a task by ID, returning the updated row.
    ///
    /// Absent DTO fields keep their current values via COALESCE.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                due_date = COALESCE($5, due_date),
                order_index = COALESCE($6, order_index),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.due_date)
            .bind(input.order_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a batch of `order_index` updates scoped to one task list.
    ///
    /// Runs in a single transaction: either every update in the batch is
    /// applied or none are. Each update matches on `id AND task_list_id`, so
    /// entries referencing tasks outside the list (or tasks that do not
    /// exist) match zero rows and are skipped without failing the batch.
    /// Supplied indices are written verbatim; nothing de-duplicates or
    /// re-sequences them.
    ///
    /// Returns the number of rows actually updated.
    pub async fn reorder(
        pool: &PgPool,
        task_list_id: DbId,
        updates: &[TaskOrderUpdate],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut updated = 0u64;

        for entry in updates {
            let result = sqlx::query(
                "UPDATE tasks SET order_index = $3, updated_at = now()
                 WHERE id = $1 AND task_list_id = $2",
            )
            .bind(entry.id)
            .bind(task_list_id)
            .bind(entry.order_index)
            .execute(&mut *tx)
            .await?;
            updated += result.rows_affected();
        }

        tx.commit().await?;
        Ok(updated)
    }
}
