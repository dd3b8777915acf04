//! # Weektask Core Library
//!
//! Task collection with week-window recurrence evaluation and pluggable
//! key-value persistence.
//!
//! ## Core Modules
//!
//! - [`models`]: The task record, occurrence patterns and field patches
//! - [`recurrence`]: Week windows and the visibility rules per occurrence
//! - [`repository`]: The task store and its repository trait
//! - [`storage`]: Persistence collaborators (memory and file backed)
//! - [`error`]: Crate error type
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use weektask_core::{
//!     models::{Occurrence, Task},
//!     recurrence::WeekWindow,
//!     repository::{TaskRepository, TaskStore},
//!     storage::FileStorage,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut store = TaskStore::new(FileStorage::new(".weektask"));
//!     store.init().await;
//!
//!     let anchor = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//!     store
//!         .create(Task::new("Team sync", "", anchor, Occurrence::Weekly))
//!         .await;
//!
//!     let week = WeekWindow::containing(anchor);
//!     for task in store.tasks_for_week(week.start()) {
//!         println!("{} ({})", task.title, task.occurrence);
//!     }
//! }
//! ```

pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
pub mod storage;
