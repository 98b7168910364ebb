//! The four task operations, each one build → execute → parse round-trip.

use todo_core::{ApiError, Task, TaskClient};
use tracing::debug;

use crate::config::Config;
use crate::transport::Transport;

/// Task operations bound to one base URL and one transport.
///
/// Holds no state between calls: every operation is a fresh request and
/// nothing returned by the server is kept.
pub struct TaskApi<T> {
    client: TaskClient,
    transport: T,
}

impl<T: Transport> TaskApi<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self {
            client: TaskClient::new(&config.base_url),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submits a new task with `id: 0`. `Ok(None)` means the server
    /// accepted it but returned nothing readable.
    pub fn create(&self, title: &str, completed: bool, user_id: i64) -> Result<Option<Task>, ApiError> {
        let request = self.client.build_create_task(&Task::draft(title, completed, user_id))?;
        let response = self.transport.execute(request).inspect_err(log_failure)?;
        let created = self.client.parse_create_task(response).inspect_err(log_failure)?;
        match &created {
            Some(task) => debug!(id = task.id(), "task created"),
            None => debug!("create succeeded without a task in the response"),
        }
        Ok(created)
    }

    pub fn list(&self) -> Result<Vec<Task>, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_list_tasks())
            .inspect_err(log_failure)?;
        let tasks = self.client.parse_list_tasks(response).inspect_err(log_failure)?;
        debug!(count = tasks.len(), "tasks listed");
        Ok(tasks)
    }

    /// Replaces task `id`; only the status of the response is checked.
    pub fn update(&self, id: i64, title: &str, completed: bool, user_id: i64) -> Result<(), ApiError> {
        let request = self.client.build_update_task(&Task::new(id, title, completed, user_id))?;
        let response = self.transport.execute(request).inspect_err(log_failure)?;
        self.client.parse_update_task(response).inspect_err(log_failure)?;
        debug!(id, "task updated");
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .transport
            .execute(self.client.build_delete_task(id))
            .inspect_err(log_failure)?;
        self.client.parse_delete_task(response).inspect_err(log_failure)?;
        debug!(id, "task deleted");
        Ok(())
    }
}

fn log_failure(err: &ApiError) {
    debug!(error = %err, "request failed");
}
