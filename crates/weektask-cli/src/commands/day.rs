use anyhow::Result;
use weektask_core::repository::TaskRepository;

use crate::cli::DayCommand;
use crate::parser::parse_date;
use crate::views::display_agenda;

pub async fn show_day(repo: &impl TaskRepository, command: DayCommand) -> Result<()> {
    let date = parse_date(&command.date)?;
    display_agenda(date, &repo.tasks_on(date));
    Ok(())
}
