use crate::error::CoreError;
use crate::models::{DayAgenda, Task, TaskId, UpdateTaskData};
use crate::storage::{Storage, DEFAULT_STORAGE_KEY};
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod persistence;
pub mod tasks;

/// Operations the front end performs against the task collection.
///
/// Mutating operations persist before they return. Persistence failures
/// inside them are logged, never returned: the in-memory state stays
/// authoritative and the caller keeps working.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Replaces the in-memory collection with the persisted one.
    /// Missing or unreadable data yields an empty collection.
    async fn load(&mut self) -> Vec<Task>;
    /// Writes the whole collection, replacing what was stored before.
    async fn save(&self) -> Result<(), CoreError>;
    async fn create(&mut self, task: Task) -> Task;
    /// `None` when no task has this id.
    async fn update(&mut self, id: &TaskId, data: UpdateTaskData) -> Option<Task>;
    /// Flips `completed`. `None` when no task has this id.
    async fn toggle_completed(&mut self, id: &TaskId) -> Option<Task>;
    /// Returns whether a task was removed. Nothing is written otherwise.
    async fn delete(&mut self, id: &TaskId) -> bool;

    fn tasks(&self) -> &[Task];
    fn get(&self, id: &TaskId) -> Option<&Task>;
    /// Case-insensitive id prefix lookup.
    fn find_by_id_prefix(&self, prefix: &str) -> Vec<&Task>;
    /// Tasks visible in the seven days opening on `start`, in collection order.
    fn tasks_for_week(&self, start: NaiveDate) -> Vec<&Task>;
    /// Tasks visible on `date`, split into pending and completed.
    fn tasks_on(&self, date: NaiveDate) -> DayAgenda;
}

/// In-memory task collection backed by a [`Storage`].
///
/// Built once by the application and passed to whoever needs it; call
/// [`TaskStore::init`] on startup to pull in the persisted state.
pub struct TaskStore<S: Storage> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
}

impl<S: Storage> TaskStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            tasks: Vec::new(),
        }
    }

    /// Startup hook: loads persisted tasks and returns how many there are.
    pub async fn init(&mut self) -> usize {
        let count = TaskRepository::load(self).await.len();
        tracing::info!(key = %self.key, count, "task store initialized");
        count
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Saves and logs the outcome instead of returning it.
    async fn persist(&self) {
        if let Err(e) = self.save().await {
            tracing::error!(error = %e, key = %self.key, "failed to save tasks");
        }
    }
}
