use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use weektask_core::error::CoreError;
use weektask_core::repository::TaskRepository;

use crate::cli::DeleteCommand;
use crate::util::resolve_task_id;

pub async fn delete_task(repo: &mut impl TaskRepository, command: DeleteCommand) -> Result<()> {
    let task_id = resolve_task_id(&*repo, &command.id)?;
    let title = repo
        .get(&task_id)
        .map(|t| t.title.clone())
        .ok_or_else(|| anyhow!(CoreError::NotFound(format!("Task {} not found", task_id))))?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete task '{}'?", title))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    if repo.delete(&task_id).await {
        println!("{}", "Task deleted successfully.".green());
    }
    Ok(())
}
