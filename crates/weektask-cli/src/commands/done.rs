use anyhow::{anyhow, Result};
use owo_colors::{OwoColorize, Style};
use weektask_core::error::CoreError;
use weektask_core::repository::TaskRepository;

use crate::cli::DoneCommand;
use crate::util::resolve_task_id;

pub async fn toggle_task(repo: &mut impl TaskRepository, command: DoneCommand) -> Result<()> {
    let task_id = resolve_task_id(&*repo, &command.id)?;
    let task = repo
        .toggle_completed(&task_id)
        .await
        .ok_or_else(|| anyhow!(CoreError::NotFound(format!("Task {} not found", task_id))))?;

    if task.completed {
        println!(
            "{} Completed task: {}",
            "✓".style(Style::new().green().bold()),
            task.title.bright_white()
        );
    } else {
        println!("{} Reopened task: {}", "↺".yellow(), task.title.bright_white());
    }
    Ok(())
}
