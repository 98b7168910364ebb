//! The `Task` record exchanged with the `/todos` resource.

use serde::{Deserialize, Serialize};

/// A single remote task.
///
/// Fields are only readable; a changed task is a new `Task` value. An `id` of
/// `0` means the server has not assigned one yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    id: i64,
    title: String,
    completed: bool,
    user_id: i64,
}

impl Task {
    pub fn new(id: i64, title: impl Into<String>, completed: bool, user_id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            user_id,
        }
    }

    /// A task that has not been submitted yet, sent with `id: 0`.
    pub fn draft(title: impl Into<String>, completed: bool, user_id: i64) -> Self {
        Self::new(0, title, completed, user_id)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }
}
