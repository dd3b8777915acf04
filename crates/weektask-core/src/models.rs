use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// The recurrence pattern a task follows.
///
/// Stored as a lowercase tag. Tags outside the six known patterns load as
/// [`Occurrence::Unknown`], keep their raw text on save, and never match a
/// window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Occurrence {
    #[default]
    Once,
    Daily,
    Weekdays,
    Weekly,
    Monthly,
    Yearly,
    Unknown(String),
}

impl Occurrence {
    pub const ALL: [Occurrence; 6] = [
        Occurrence::Once,
        Occurrence::Daily,
        Occurrence::Weekdays,
        Occurrence::Weekly,
        Occurrence::Monthly,
        Occurrence::Yearly,
    ];

    pub fn is_recurring(&self) -> bool {
        matches!(
            self,
            Occurrence::Daily
                | Occurrence::Weekdays
                | Occurrence::Weekly
                | Occurrence::Monthly
                | Occurrence::Yearly
        )
    }

    pub fn tag(&self) -> &str {
        match self {
            Occurrence::Once => "once",
            Occurrence::Daily => "daily",
            Occurrence::Weekdays => "weekdays",
            Occurrence::Weekly => "weekly",
            Occurrence::Monthly => "monthly",
            Occurrence::Yearly => "yearly",
            Occurrence::Unknown(raw) => raw,
        }
    }

    fn from_known_tag(tag: &str) -> Option<Self> {
        Occurrence::ALL.into_iter().find(|o| o.tag() == tag)
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<String> for Occurrence {
    fn from(raw: String) -> Self {
        Occurrence::from_known_tag(&raw).unwrap_or(Occurrence::Unknown(raw))
    }
}

impl From<Occurrence> for String {
    fn from(occurrence: Occurrence) -> Self {
        match occurrence {
            Occurrence::Unknown(raw) => raw,
            known => known.tag().to_string(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid occurrence: {0} (expected once, daily, weekdays, weekly, monthly or yearly)")]
pub struct ParseOccurrenceError(String);

/// Parses user input. Unlike stored tags, unknown patterns are rejected.
impl FromStr for Occurrence {
    type Err = ParseOccurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Occurrence::from_known_tag(&s.to_lowercase())
            .ok_or_else(|| ParseOccurrenceError(s.to_string()))
    }
}

/// Opaque task identifier.
///
/// New ids are random UUIDs, but any string loads, so collections written
/// with other id schemes keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive prefix match, used for short-id lookup.
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.0
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for TaskId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// A single task anchored on a calendar date.
///
/// For a one-time task `date` is the day it happens on. For recurring tasks
/// it is the anchor the pattern is matched against (day of week, day of
/// month, or month and day).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub occurrence: Occurrence,
}

impl Task {
    /// Creates a pending task with a fresh id.
    ///
    /// The title is not validated here; rejecting empty titles is left to
    /// whoever collects user input.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        occurrence: Occurrence,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            date,
            completed: false,
            occurrence,
        }
    }

    /// Merges every field set in `data` into this task. The id never changes.
    pub fn apply(&mut self, data: UpdateTaskData) {
        if let Some(title) = data.title {
            self.title = title;
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(date) = data.date {
            self.date = date;
        }
        if let Some(completed) = data.completed {
            self.completed = completed;
        }
        if let Some(occurrence) = data.occurrence {
            self.occurrence = occurrence;
        }
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

/// Field patch for [`Task`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub completed: Option<bool>,
    pub occurrence: Option<Occurrence>,
}

impl UpdateTaskData {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Tasks visible on one day, split the way the day view shows them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayAgenda {
    pub todo: Vec<Task>,
    pub done: Vec<Task>,
}

impl DayAgenda {
    pub fn is_empty(&self) -> bool {
        self.todo.is_empty() && self.done.is_empty()
    }
}

/// Dates are written as `YYYY-MM-DD`. Older payloads stored a full
/// RFC 3339 timestamp; those still read, keeping the calendar date as
/// written in the timestamp.
mod iso_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.date_naive())
            .map_err(|_| de::Error::custom(format!("invalid date: {raw}")))
    }
}
