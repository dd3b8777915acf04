use chrono::{Local, NaiveDate};
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use weektask_core::models::{DayAgenda, Occurrence, Task, TaskId};
use weektask_core::recurrence::WeekWindow;

use crate::util::short_id;

#[derive(Debug, Clone)]
pub struct ViewTask {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub occurrence: Occurrence,
    pub date: NaiveDate,
    pub completed: bool,
}

impl From<&Task> for ViewTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            occurrence: task.occurrence.clone(),
            date: task.date,
            completed: task.completed,
        }
    }
}

/// One day of the week strip: the date and how many tasks land on it.
#[derive(Debug, Clone)]
pub struct ViewDay {
    pub date: NaiveDate,
    pub count: usize,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn anchor_text(task: &ViewTask, today: NaiveDate) -> String {
    let date = task.date.format("%Y-%m-%d").to_string();
    if task.occurrence.is_recurring() {
        return format!("from {date}");
    }
    if task.date == today {
        return format!("{date} (today)");
    }
    format!("{date} ({})", HumanTime::from(task.date - today))
}

pub fn display_tasks(tasks: &[ViewTask]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let today = today();
    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Repeats", "Date", "Status"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(short_id(&task.id)));

        let mut display_title = task.title.clone();
        if task.occurrence.is_recurring() {
            display_title.insert_str(0, "↻ ");
        }
        if !task.description.is_empty() {
            display_title.push_str(&format!("\n  {}", task.description));
        }
        let mut title_cell = Cell::new(display_title);
        if task.completed {
            title_cell = title_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        } else if !task.occurrence.is_recurring() && task.date < today {
            title_cell = title_cell.fg(Color::Red); // Past one-off
        }
        row.add_cell(title_cell);

        row.add_cell(Cell::new(task.occurrence.to_string()));
        row.add_cell(Cell::new(anchor_text(task, today)));

        let status_cell = if task.completed {
            Cell::new("Done").fg(Color::Green)
        } else {
            Cell::new("Pending")
        };
        row.add_cell(status_cell);
        table.add_row(row);
    }

    println!("{table}");
}

/// Sunday-first strip of the week with per-day task counts.
pub fn display_week_strip(window: &WeekWindow, days: &[ViewDay]) {
    let today = today();
    let mut table = Table::new();

    let mut header = Row::new();
    let mut counts = Row::new();
    for day in days {
        let mut label = Cell::new(day.date.format("%a %d").to_string());
        if day.date == today {
            label = label.fg(Color::Cyan).add_attribute(Attribute::Bold);
        }
        header.add_cell(label);

        let count = match day.count {
            0 => Cell::new("-").fg(Color::DarkGrey),
            n => Cell::new(n.to_string()),
        };
        counts.add_cell(count);
    }
    table.add_row(header);
    table.add_row(counts);

    println!(
        "Week of {} to {}",
        window.start().format("%Y-%m-%d"),
        window.end().format("%Y-%m-%d")
    );
    println!("{table}");
}

pub fn display_agenda(date: NaiveDate, agenda: &DayAgenda) {
    println!("{}", date.format("%A, %B %-d %Y"));
    if agenda.is_empty() {
        println!("No tasks for this day.");
        return;
    }

    println!("To do:");
    if agenda.todo.is_empty() {
        println!("  Nothing left to do.");
    }
    for task in &agenda.todo {
        print_agenda_line(task);
    }

    println!("Done:");
    if agenda.done.is_empty() {
        println!("  Nothing done yet.");
    }
    for task in &agenda.done {
        print_agenda_line(task);
    }
}

fn print_agenda_line(task: &Task) {
    let marker = if task.completed { "[x]" } else { "[ ]" };
    println!(
        "  {} {} {} ({})",
        marker,
        short_id(&task.id),
        task.title,
        task.occurrence
    );
    if !task.description.is_empty() {
        println!("      {}", task.description);
    }
}
