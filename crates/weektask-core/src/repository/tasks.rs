use crate::error::CoreError;
use crate::models::{DayAgenda, Task, TaskId, UpdateTaskData};
use crate::recurrence::{is_visible_in_week, is_visible_on};
use crate::repository::persistence::{decode_tasks, encode_tasks};
use crate::repository::TaskStore;
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
impl<S: Storage> super::TaskRepository for TaskStore<S> {
    async fn load(&mut self) -> Vec<Task> {
        let loaded = match self.storage.get(&self.key).await {
            Ok(Some(raw)) => match decode_tasks(&raw) {
                Ok(tasks) => tasks,
                Err(e) => {
                    tracing::error!(error = %e, key = %self.key, "stored tasks are unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored tasks");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(error = %e, key = %self.key, "failed to read stored tasks, starting empty");
                Vec::new()
            }
        };

        self.tasks = loaded;
        self.tasks.clone()
    }

    async fn save(&self) -> Result<(), CoreError> {
        let raw = encode_tasks(&self.tasks)?;
        self.storage.set(&self.key, &raw).await?;
        tracing::debug!(key = %self.key, count = self.tasks.len(), "tasks saved");
        Ok(())
    }

    async fn create(&mut self, task: Task) -> Task {
        tracing::debug!(id = %task.id, occurrence = %task.occurrence, "creating task");
        self.tasks.push(task.clone());
        self.persist().await;
        task
    }

    async fn update(&mut self, id: &TaskId, data: UpdateTaskData) -> Option<Task> {
        let index = self.position(id)?;
        self.tasks[index].apply(data);
        let updated = self.tasks[index].clone();
        tracing::debug!(%id, "task updated");
        self.persist().await;
        Some(updated)
    }

    async fn toggle_completed(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.position(id)?;
        self.tasks[index].toggle_completed();
        let toggled = self.tasks[index].clone();
        tracing::debug!(%id, completed = toggled.completed, "task completion toggled");
        self.persist().await;
        Some(toggled)
    }

    async fn delete(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        tracing::debug!(%id, "task deleted");
        self.persist().await;
        true
    }

    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    fn find_by_id_prefix(&self, prefix: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.id.starts_with_ignore_case(prefix))
            .collect()
    }

    fn tasks_for_week(&self, start: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| is_visible_in_week(t, start))
            .collect()
    }

    fn tasks_on(&self, date: NaiveDate) -> DayAgenda {
        let (done, todo): (Vec<Task>, Vec<Task>) = self
            .tasks
            .iter()
            .filter(|t| is_visible_on(t, date))
            .cloned()
            .partition(|t| t.completed);
        DayAgenda { todo, done }
    }
}
