//! Typed HTTP client for the taskdeck API.
//!
//! Thin wrapper used by frontends: one async method per API route, sharing
//! the model types from `taskdeck_db`. Non-2xx responses surface as
//! [`ClientError::Api`] carrying the status code and the raw body (an opaque
//! diagnostic string, per the API's error contract).

use serde::Deserialize;

use taskdeck_core::types::DbId;
use taskdeck_db::models::task::{CreateTask, Task, TaskOrderUpdate, UpdateTask};
use taskdeck_db::models::task_list::{CreateTaskList, TaskList};

/// HTTP client for a taskdeck API server.
pub struct TaskClient {
    client: reqwest::Client,
    base_url: String,
}

/// Result of a reorder batch, as reported by the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderOutcome {
    /// Number of rows whose `orderIndex` was actually written.
    pub updated: u64,
}

/// Errors from the client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl TaskClient {
    /// Create a new client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:3000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple services).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    // -- Tasks --------------------------------------------------------------

    /// List all tasks (`GET /tasks?sortBy=&order=`).
    ///
    /// Both parameters are optional; the server falls back to `createdAt`
    /// ascending for anything outside its whitelist.
    pub async fn list_tasks(
        &self,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Vec<Task>, ClientError> {
        let mut request = self.client.get(format!("{}/tasks", self.base_url));
        if let Some(sort_by) = sort_by {
            request = request.query(&[("sortBy", sort_by)]);
        }
        if let Some(order) = order {
            request = request.query(&[("order", order)]);
        }

        Self::parse_response(request.send().await?).await
    }

    /// Fetch one task by id (`GET /tasks/{id}`).
    pub async fn get_task(&self, id: DbId) -> Result<Task, ClientError> {
        let response = self
            .client
            .get(format!("{}/tasks/{id}", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create a task (`POST /tasks`).
    pub async fn create_task(&self, task: &CreateTask) -> Result<Task, ClientError> {
        let response = self
            .client
            .post(format!("{}/tasks", self.base_url))
            .json(task)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Update a task (`PUT /tasks/{id}`). Absent fields are left unchanged.
    pub async fn update_task(&self, id: DbId, task: &UpdateTask) -> Result<Task, ClientError> {
        let response = self
            .client
            .put(format!("{}/tasks/{id}", self.base_url))
            .json(task)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a task (`DELETE /tasks/{id}`).
    pub async fn delete_task(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/tasks/{id}", self.base_url))
            .send()
            .await?;
        Self::check_status(response).await
    }

    // -- Task lists ---------------------------------------------------------

    /// List all task lists (`GET /tasklists`).
    pub async fn list_task_lists(&self) -> Result<Vec<TaskList>, ClientError> {
        let response = self
            .client
            .get(format!("{}/tasklists", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create a task list (`POST /tasklists`).
    pub async fn create_task_list(&self, name: &str) -> Result<TaskList, ClientError> {
        let response = self
            .client
            .post(format!("{}/tasklists", self.base_url))
            .json(&CreateTaskList {
                name: name.to_string(),
            })
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// List the tasks of one list (`GET /tasklists/{id}/tasks?sortBy=&sortOrder=`).
    ///
    /// With no parameters the server returns the manual ordering
    /// (`orderIndex` ascending).
    pub async fn tasks_in_list(
        &self,
        task_list_id: DbId,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Result<Vec<Task>, ClientError> {
        let mut request = self
            .client
            .get(format!("{}/tasklists/{task_list_id}/tasks", self.base_url));
        if let Some(sort_by) = sort_by {
            request = request.query(&[("sortBy", sort_by)]);
        }
        if let Some(sort_order) = sort_order {
            request = request.query(&[("sortOrder", sort_order)]);
        }

        Self::parse_response(request.send().await?).await
    }

    /// Apply a reorder batch to one list (`POST /tasklists/{id}/updateOrder`).
    pub async fn update_order(
        &self,
        task_list_id: DbId,
        batch: &[TaskOrderUpdate],
    ) -> Result<ReorderOutcome, ClientError> {
        let response = self
            .client
            .post(format!(
                "{}/tasklists/{task_list_id}/updateOrder",
                self.base_url
            ))
            .json(&batch)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a task list and all of its tasks (`DELETE /tasklists/{id}`).
    pub async fn delete_task_list(&self, task_list_id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/tasklists/{task_list_id}", self.base_url))
            .send()
            .await?;
        Self::check_status(response).await
    }

    // -- Helpers ------------------------------------------------------------

    /// Deserialize a 2xx response body, or turn a non-2xx response into
    /// [`ClientError::Api`].
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }

    /// Check a response status, discarding the body on success.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = ClientError::Api {
            status: 404,
            body: "Task with id 9 not found".into(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }
}
