use anyhow::{anyhow, Result};
use weektask_core::error::CoreError;
use weektask_core::models::TaskId;
use weektask_core::repository::TaskRepository;

/// Number of id characters shown in tables.
pub const SHORT_ID_LEN: usize = 8;

pub fn resolve_task_id(repo: &impl TaskRepository, short_id: &str) -> Result<TaskId> {
    if short_id.len() < 2 {
        return Err(anyhow!(CoreError::InvalidInput(
            "Short ID must be at least 2 characters long.".to_string()
        )));
    }
    let tasks = repo.find_by_id_prefix(short_id);
    if tasks.len() == 1 {
        Ok(tasks[0].id.clone())
    } else if tasks.is_empty() {
        Err(anyhow!(CoreError::NotFound(format!(
            "No task found with ID prefix '{}'",
            short_id
        ))))
    } else {
        let task_info: Vec<(String, String)> = tasks
            .into_iter()
            .map(|t| (t.id.to_string(), t.title.clone()))
            .collect();
        Err(anyhow!(CoreError::AmbiguousId(task_info)))
    }
}

/// First [`SHORT_ID_LEN`] characters of the id, or all of it when shorter.
pub fn short_id(id: &TaskId) -> String {
    id.as_str().chars().take(SHORT_ID_LEN).collect()
}

/// Rejects titles that are empty once trimmed; the store accepts anything.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(anyhow!(CoreError::InvalidInput(
            "Please enter a task title.".to_string()
        )));
    }
    Ok(trimmed.to_string())
}
