//! Domain types shared across the taskdeck workspace.
//!
//! No I/O lives here: this crate defines the id and timestamp aliases, the
//! error taxonomy, task status constants, required-field validation, and the
//! sort-field whitelist used to build ORDER BY clauses.

pub mod error;
pub mod ordering;
pub mod task;
pub mod types;
