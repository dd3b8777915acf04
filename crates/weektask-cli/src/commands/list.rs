use anyhow::Result;
use weektask_core::repository::TaskRepository;

use crate::views::{display_tasks, ViewTask};

pub async fn list_tasks(repo: &impl TaskRepository) -> Result<()> {
    let mut tasks: Vec<ViewTask> = repo.tasks().iter().map(ViewTask::from).collect();
    tasks.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
    display_tasks(&tasks);
    Ok(())
}
