//! Task status constants and required-field validation.
//!
//! The status domain is deliberately open: the named constants cover the
//! values the frontend knows about, but arbitrary strings are accepted and
//! stored as-is.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Status constants
   -------------------------------------------------------------------------- */

/// Newly created tasks default to this status.
pub const STATUS_PENDING: &str = "pending";

/// Work has started on the task.
pub const STATUS_IN_PROGRESS: &str = "in_progress";

/// The task is finished.
pub const STATUS_DONE: &str = "done";

/// The status values the UI is aware of. Not an enforced domain.
pub const KNOWN_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_DONE];

/// Whether `status` is one of the well-known values.
pub fn is_known_status(status: &str) -> bool {
    KNOWN_STATUSES.contains(&status)
}

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a task title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length for a task list name.
pub const MAX_LIST_NAME_LEN: usize = 200;

/// Maximum length for a task description.
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a task title: non-empty and within length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Task title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Task title too long: {} chars (max {MAX_TITLE_LEN})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate a task list name: non-empty and within length limit.
pub fn validate_list_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Task list name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_LIST_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Task list name too long: {} chars (max {MAX_LIST_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate an optional task description against the length limit.
pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    if let Some(desc) = description {
        if desc.len() > MAX_DESCRIPTION_LEN {
            return Err(CoreError::Validation(format!(
                "Task description too long: {} chars (max {MAX_DESCRIPTION_LEN})",
                desc.len()
            )));
        }
    }
    Ok(())
}
