use anyhow::{anyhow, Result};
use chrono::{Days, NaiveDate};
use weektask_core::error::CoreError;
use weektask_core::models::Task;
use weektask_core::recurrence::{occurrence_dates, WeekWindow};
use weektask_core::repository::TaskRepository;

use crate::cli::WeekCommand;
use crate::parser::parse_date;
use crate::views::{display_tasks, display_week_strip, ViewDay, ViewTask};

const DAYS_PER_WEEK: u64 = 7;

/// Day strip and task table both come from the per-day rule, so a task is
/// listed exactly when it is counted on at least one day.
pub async fn show_week(repo: &impl TaskRepository, command: WeekCommand) -> Result<()> {
    let window = shift(WeekWindow::containing(parse_date(&command.date)?), command.offset)
        .ok_or_else(|| {
            anyhow!(CoreError::InvalidInput(format!(
                "Week offset {} is out of range.",
                command.offset
            )))
        })?;

    let scheduled = scheduled_in(repo.tasks(), window);

    let days: Vec<ViewDay> = window
        .days()
        .map(|date| ViewDay {
            date,
            count: scheduled
                .iter()
                .filter(|(_, dates)| dates.contains(&date))
                .count(),
        })
        .collect();
    display_week_strip(&window, &days);

    let tasks: Vec<ViewTask> = scheduled
        .into_iter()
        .map(|(task, _)| ViewTask::from(task))
        .collect();
    display_tasks(&tasks);
    Ok(())
}

/// Tasks visible on at least one day of `window`, with those days.
fn scheduled_in(tasks: &[Task], window: WeekWindow) -> Vec<(&Task, Vec<NaiveDate>)> {
    tasks
        .iter()
        .map(|task| (task, occurrence_dates(task, window)))
        .filter(|(_, dates)| !dates.is_empty())
        .collect()
}

/// Moves `window` by whole weeks. `None` past the calendar's range.
fn shift(window: WeekWindow, offset: i32) -> Option<WeekWindow> {
    let days = Days::new(DAYS_PER_WEEK * u64::from(offset.unsigned_abs()));
    let start = if offset >= 0 {
        window.start().checked_add_days(days)?
    } else {
        window.start().checked_sub_days(days)?
    };
    Some(WeekWindow::new(start))
}
