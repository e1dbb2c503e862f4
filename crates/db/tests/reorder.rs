//! Integration tests for the batch reorder contract.
//!
//! The contract under test:
//! - every update in a batch applies in one transaction
//! - updates are matched on `id AND task_list_id`; entries referencing
//!   tasks outside the list, or tasks that do not exist, are silently
//!   skipped while the rest of the batch still applies
//! - supplied indices are written verbatim, duplicates and gaps included

use sqlx::PgPool;
use taskdeck_core::ordering::{SortDirection, TaskSortField};
use taskdeck_db::models::task::{CreateTask, Task, TaskOrderUpdate};
use taskdeck_db::models::task_list::CreateTaskList;
use taskdeck_db::repositories::{TaskListRepo, TaskRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_list(pool: &PgPool, name: &str) -> i64 {
    TaskListRepo::create(pool, &CreateTaskList { name: name.into() })
        .await
        .unwrap()
        .id
}

async fn new_member(pool: &PgPool, list_id: i64, title: &str, index: i32) -> Task {
    TaskRepo::create(
        pool,
        &CreateTask {
            title: title.to_string(),
            description: None,
            status: None,
            due_date: None,
            task_list_id: Some(list_id),
            order_index: Some(index),
        },
    )
    .await
    .unwrap()
}

fn entry(id: i64, order_index: i32) -> TaskOrderUpdate {
    TaskOrderUpdate { id, order_index }
}

async fn custom_order(pool: &PgPool, list_id: i64) -> Vec<String> {
    TaskRepo::list_by_list(pool, list_id, TaskSortField::Custom, SortDirection::Asc)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_applies_whole_batch(pool: PgPool) {
    let list = new_list(&pool, "Board").await;
    let a = new_member(&pool, list, "a", 0).await;
    let b = new_member(&pool, list, "b", 1).await;
    let c = new_member(&pool, list, "c", 2).await;

    let updated = TaskRepo::reorder(
        &pool,
        list,
        &[entry(a.id, 2), entry(b.id, 0), entry(c.id, 1)],
    )
    .await
    .unwrap();

    assert_eq!(updated, 3);
    assert_eq!(custom_order(&pool, list).await, ["b", "c", "a"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_skips_tasks_outside_the_list(pool: PgPool) {
    let list = new_list(&pool, "Mine").await;
    let other = new_list(&pool, "Theirs").await;

    let mine = new_member(&pool, list, "mine", 0).await;
    let foreign = new_member(&pool, other, "foreign", 0).await;

    let updated = TaskRepo::reorder(&pool, list, &[entry(mine.id, 5), entry(foreign.id, 9)])
        .await
        .unwrap();

    assert_eq!(updated, 1);

    let mine_after = TaskRepo::find_by_id(&pool, mine.id).await.unwrap().unwrap();
    assert_eq!(mine_after.order_index, 5);

    // The foreign task's index is unchanged.
    let foreign_after = TaskRepo::find_by_id(&pool, foreign.id).await.unwrap().unwrap();
    assert_eq!(foreign_after.order_index, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_skips_unknown_ids(pool: PgPool) {
    let list = new_list(&pool, "Sparse").await;
    let real = new_member(&pool, list, "real", 0).await;

    let updated = TaskRepo::reorder(&pool, list, &[entry(999_999, 1), entry(real.id, 3)])
        .await
        .unwrap();

    assert_eq!(updated, 1);
    let after = TaskRepo::find_by_id(&pool, real.id).await.unwrap().unwrap();
    assert_eq!(after.order_index, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_writes_duplicates_and_gaps_verbatim(pool: PgPool) {
    let list = new_list(&pool, "Loose").await;
    let a = new_member(&pool, list, "a", 0).await;
    let b = new_member(&pool, list, "b", 1).await;
    let c = new_member(&pool, list, "c", 2).await;

    // Not a permutation: duplicate 5 and a gap up to 42. Stored as given.
    TaskRepo::reorder(&pool, list, &[entry(a.id, 5), entry(b.id, 5), entry(c.id, 42)])
        .await
        .unwrap();

    let indices: Vec<i32> = TaskRepo::list_by_list(
        &pool,
        list,
        TaskSortField::OrderIndex,
        SortDirection::Asc,
    )
    .await
    .unwrap()
    .into_iter()
    .map(|t| t.order_index)
    .collect();

    assert_eq!(indices, [5, 5, 42]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_empty_batch_is_a_noop(pool: PgPool) {
    let list = new_list(&pool, "Empty").await;
    let updated = TaskRepo::reorder(&pool, list, &[]).await.unwrap();
    assert_eq!(updated, 0);
}
