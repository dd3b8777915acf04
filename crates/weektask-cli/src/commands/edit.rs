use anyhow::{anyhow, Result};
use owo_colors::OwoColorize;
use weektask_core::error::CoreError;
use weektask_core::models::UpdateTaskData;
use weektask_core::repository::TaskRepository;

use crate::cli::EditCommand;
use crate::parser::parse_date;
use crate::util::{resolve_task_id, validate_title};

pub async fn edit_task(repo: &mut impl TaskRepository, command: EditCommand) -> Result<()> {
    let task_id = resolve_task_id(&*repo, &command.id)?;
    let data = build_update(&command)?;
    if data.is_empty() {
        return Err(anyhow!(CoreError::InvalidInput(
            "Nothing to change. Pass at least one of --title, --description, --date, --every, --done or --pending.".to_string()
        )));
    }

    let task = repo
        .update(&task_id, data)
        .await
        .ok_or_else(|| anyhow!(CoreError::NotFound(format!("Task {} not found", task_id))))?;

    println!("{} Task updated: {}", "✓".green().bold(), task.title.bright_white());
    Ok(())
}

fn build_update(command: &EditCommand) -> Result<UpdateTaskData> {
    let completed = match (command.done, command.pending) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    };
    Ok(UpdateTaskData {
        title: command.title.as_deref().map(validate_title).transpose()?,
        description: command.description.as_ref().map(|d| d.trim().to_string()),
        date: command.date.as_deref().map(parse_date).transpose()?,
        completed,
        occurrence: command.every.clone(),
    })
}
