//! Route definitions, one module per resource.
//!
//! Routers are mounted at the root by `crate::router::build_app_router`.

pub mod health;
pub mod task_lists;
pub mod tasks;
