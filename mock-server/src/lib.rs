//! In-memory stand-in for the public `/todos` test API.
//!
//! Same JSON shape (`id`, `title`, `completed`, `userId`), integer ids,
//! `201` on create, `{}` on delete. Unlike the public API it actually keeps
//! what it is sent, so tests can observe the effect of each call.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub user_id: i64,
}

#[derive(Debug, Default)]
pub struct Store {
    tasks: BTreeMap<i64, Task>,
    /// `None` once the id space is used up.
    next_id: Option<i64>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with_tasks(Vec::new())
}

/// Router pre-seeded with `tasks`; new ids continue after the highest seed.
pub fn app_with_tasks(tasks: Vec<Task>) -> Router {
    let next_id = tasks
        .iter()
        .map(|t| t.id)
        .max()
        .map_or(Some(1), |id| id.checked_add(1));
    let store = Store {
        tasks: tasks.into_iter().map(|t| (t.id, t)).collect(),
        next_id,
    };
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/todos", get(list_tasks).post(create_task))
        .route("/todos/{id}", put(update_task).delete(delete_task))
        .with_state(db)
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let store = db.read().await;
    Json(store.tasks.values().cloned().collect())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<Task>,
) -> Result<(StatusCode, Json<Task>), StatusCode> {
    let mut store = db.write().await;
    let id = store.next_id.ok_or(StatusCode::INSUFFICIENT_STORAGE)?;
    let task = Task { id, ..input };
    store.next_id = id.checked_add(1);
    store.tasks.insert(id, task.clone());
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<Task>,
) -> Result<Json<Task>, StatusCode> {
    let mut store = db.write().await;
    let slot = store.tasks.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *slot = Task { id, ..input };
    Ok(Json(slot.clone()))
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut store = db.write().await;
    store
        .tasks
        .remove(&id)
        .map(|_| Json(serde_json::json!({})))
        .ok_or(StatusCode::NOT_FOUND)
}
