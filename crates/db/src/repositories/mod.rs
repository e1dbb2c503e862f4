//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-step writes (cascade
//! delete, batch reorder) run inside a transaction; single-row operations
//! do not.

pub mod task_list_repo;
pub mod task_repo;

pub use task_list_repo::TaskListRepo;
pub use task_repo::TaskRepo;
