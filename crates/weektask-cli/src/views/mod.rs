pub mod table;

pub use table::{display_agenda, display_tasks, display_week_strip, ViewDay, ViewTask};
