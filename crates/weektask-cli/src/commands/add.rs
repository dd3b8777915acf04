use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use weektask_core::models::Task;
use weektask_core::repository::TaskRepository;

use crate::cli::AddCommand;
use crate::parser::parse_date;
use crate::util::{short_id, validate_title};

pub async fn add_task(repo: &mut impl TaskRepository, command: AddCommand) -> Result<()> {
    let title = validate_title(&command.title)?;
    let date = parse_date(&command.date)?;

    let task = repo
        .create(Task::new(title, command.description.trim(), date, command.every))
        .await;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    println!(
        "{} Created task: {}",
        "✓".style(success_style),
        task.title.bright_white().bold()
    );
    println!(
        "  {} Task ID: {}",
        "→".style(info_style),
        short_id(&task.id).yellow()
    );
    if task.occurrence.is_recurring() {
        println!(
            "  {} Repeats {} from {}",
            "→".style(info_style),
            task.occurrence,
            task.date.format("%Y-%m-%d").to_string().cyan()
        );
    } else {
        println!(
            "  {} Date: {}",
            "→".style(info_style),
            task.date.format("%Y-%m-%d").to_string().cyan()
        );
    }

    Ok(())
}
