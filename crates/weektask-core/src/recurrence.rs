//! Week-window recurrence evaluation.
//!
//! A task is matched against a window of consecutive days using its anchor
//! date and occurrence pattern. The rules compare calendar fields only
//! (weekday, day of month, month); no time of day takes part.
//!
//! | Occurrence | Visible in window iff                                  |
//! |------------|--------------------------------------------------------|
//! | `once`     | the anchor lies inside the window                      |
//! | `daily`    | always                                                 |
//! | `weekdays` | the anchor itself falls on Monday..Friday              |
//! | `weekly`   | anchor weekday == window start weekday                 |
//! | `monthly`  | anchor day of month == window start day of month       |
//! | `yearly`   | anchor (month, day) == window start (month, day)       |
//! | unknown    | never                                                  |
//!
//! The `weekdays` rule looks at the anchor, not at the days inside the
//! window, so a weekday-anchored task shows up on weekends as well.
//! Anchors on the 29th..31st are skipped in months without that day;
//! there is no end-of-month clamping.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{Occurrence, Task};

/// Number of days in a week window.
pub const WEEK_LEN: u64 = 7;

/// Seven consecutive days starting at `start`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// Window opening on `start` exactly, whatever weekday that is.
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    /// The Sunday-first week that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = u64::from(day_of_week(date));
        Self::new(date.checked_sub_days(Days::new(offset)).unwrap_or(date))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(WEEK_LEN - 1))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end()
    }

    /// The days of the window in order. Stops early at the end of the
    /// representable calendar.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..WEEK_LEN).map_while(move |n| start.checked_add_days(Days::new(n)))
    }

    pub fn next_week(&self) -> Self {
        Self::new(
            self.start
                .checked_add_days(Days::new(WEEK_LEN))
                .unwrap_or(self.start),
        )
    }

    pub fn previous_week(&self) -> Self {
        Self::new(
            self.start
                .checked_sub_days(Days::new(WEEK_LEN))
                .unwrap_or(self.start),
        )
    }
}

/// Day of week with Sunday as 0 and Saturday as 6.
#[inline]
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

#[inline]
fn is_weekday(date: NaiveDate) -> bool {
    !matches!(day_of_week(date), 0 | 6)
}

/// Core rule shared by the week and single-day queries. `last` is the final
/// day of the window; only `once` depends on it.
fn matches_window(task: &Task, start: NaiveDate, last: NaiveDate) -> bool {
    let anchor = task.date;
    match task.occurrence {
        Occurrence::Once => start <= anchor && anchor <= last,
        Occurrence::Daily => true,
        Occurrence::Weekdays => is_weekday(anchor),
        Occurrence::Weekly => day_of_week(anchor) == day_of_week(start),
        Occurrence::Monthly => anchor.day() == start.day(),
        Occurrence::Yearly => anchor.month() == start.month() && anchor.day() == start.day(),
        Occurrence::Unknown(_) => false,
    }
}

/// Whether `task` shows up in the seven-day window opening on `start`.
pub fn is_visible_in_week(task: &Task, start: NaiveDate) -> bool {
    let window = WeekWindow::new(start);
    matches_window(task, window.start(), window.end())
}

/// Whether `task` shows up on `date`: the week rule over a one-day window.
pub fn is_visible_on(task: &Task, date: NaiveDate) -> bool {
    matches_window(task, date, date)
}

/// The days of `window` on which `task` is visible, in calendar order.
pub fn occurrence_dates(task: &Task, window: WeekWindow) -> Vec<NaiveDate> {
    window.days().filter(|day| is_visible_on(task, *day)).collect()
}
