use clap::{Parser, Subcommand};
use weektask_core::models::Occurrence;

/// Weektask: a week planner for one-off and recurring tasks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// Show the tasks of a week
    Week(WeekCommand),
    /// Show the tasks of a single day
    Day(DayCommand),
    /// List every task
    List,
    /// Toggle a task between done and pending
    Done(DoneCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Delete a task
    Delete(DeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The description of the task
    #[clap(short, long, default_value = "")]
    pub description: String,
    /// Anchor date (e.g. "today", "next friday", "2024-01-03")
    #[clap(long, default_value = "today")]
    pub date: String,
    /// How often the task repeats
    #[clap(
        short,
        long,
        default_value_t = Occurrence::Once,
        help = "once, daily, weekdays, weekly, monthly or yearly"
    )]
    pub every: Occurrence,
}

#[derive(Parser, Debug, Clone)]
pub struct WeekCommand {
    /// Any day inside the week to show
    #[clap(long, default_value = "today")]
    pub date: String,
    /// Shift by this many weeks (negative for the past)
    #[clap(long, default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i32,
}

#[derive(Parser, Debug, Clone)]
pub struct DayCommand {
    /// The day to show
    #[clap(long, default_value = "today")]
    pub date: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID (or unique ID prefix) of the task
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID (or unique ID prefix) of the task to edit
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long, help = "once, daily, weekdays, weekly, monthly or yearly")]
    pub every: Option<Occurrence>,

    /// Mark the task as done
    #[arg(long, conflicts_with = "pending")]
    pub done: bool,

    /// Mark the task as pending
    #[arg(long)]
    pub pending: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID (or unique ID prefix) of the task to delete
    pub id: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}
