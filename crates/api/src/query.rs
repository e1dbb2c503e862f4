//! Shared query parameter types for API handlers.
//!
//! Sort parameters arrive as free strings and are resolved against the
//! whitelist in `taskdeck_core::ordering` inside the handlers; anything
//! outside the whitelist silently falls back to the endpoint's default.

use serde::Deserialize;

/// Query parameters for the global task listing (`?sortBy=&order=`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSortParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Query parameters for the list-scoped task listing (`?sortBy=&sortOrder=`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedTaskSortParams {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
