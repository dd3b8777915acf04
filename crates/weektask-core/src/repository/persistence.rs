//! Encoding of the task collection for storage.
//!
//! The collection is a JSON array of task records, written whole on every
//! save. Unknown occurrence tags and foreign id formats decode fine;
//! a record that is structurally broken (missing title, unreadable date)
//! rejects the whole payload.

use crate::error::CoreError;
use crate::models::Task;

pub fn encode_tasks(tasks: &[Task]) -> Result<String, CoreError> {
    Ok(serde_json::to_string(tasks)?)
}

pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, CoreError> {
    Ok(serde_json::from_str(raw)?)
}
