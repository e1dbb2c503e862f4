//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Everything serializes camelCase on the wire (`taskListId`, `dueDate`,
//! `orderIndex`...) while fields and columns stay snake_case.

pub mod task;
pub mod task_list;
