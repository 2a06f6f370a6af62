// View window module
// The visible Sunday-aligned week plus zoom granularity

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::{end_of_day, get_week_start, start_of_day};

/// Number of days in the visible window.
pub const DAYS_IN_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("week start {0} is a {1:?}, expected a Sunday")]
    NotSundayAligned(NaiveDate, Weekday),
}

/// The 7-day period currently being laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawViewWindow")]
pub struct ViewWindow {
    week_start: NaiveDate,
    pub is_zoomed_in: bool,
}

/// Wire form of [`ViewWindow`], checked through [`ViewWindow::new`].
#[derive(Deserialize)]
struct RawViewWindow {
    week_start: NaiveDate,
    #[serde(default)]
    is_zoomed_in: bool,
}

impl TryFrom<RawViewWindow> for ViewWindow {
    type Error = WindowError;

    fn try_from(raw: RawViewWindow) -> Result<Self, Self::Error> {
        Self::new(raw.week_start, raw.is_zoomed_in)
    }
}

impl ViewWindow {
    /// Create a window starting on `week_start`, which must be a Sunday.
    pub fn new(week_start: NaiveDate, is_zoomed_in: bool) -> Result<Self, WindowError> {
        let weekday = week_start.weekday();
        if weekday != Weekday::Sun {
            return Err(WindowError::NotSundayAligned(week_start, weekday));
        }
        Ok(Self {
            week_start,
            is_zoomed_in,
        })
    }

    /// The window for the week containing `date`.
    pub fn containing(date: NaiveDate, is_zoomed_in: bool) -> Self {
        Self {
            week_start: get_week_start(date, 0),
            is_zoomed_in,
        }
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// First instant of the window (Sunday 00:00).
    pub fn start(&self) -> NaiveDateTime {
        start_of_day(self.week_start)
    }

    /// Exclusive end of the window (the following Sunday 00:00).
    pub fn end_exclusive(&self) -> NaiveDateTime {
        self.start() + Duration::days(DAYS_IN_WEEK as i64)
    }

    /// Last clamping instant of the window (Saturday 23:59:59).
    pub fn last_instant(&self) -> NaiveDateTime {
        end_of_day(self.last_date())
    }

    pub fn last_date(&self) -> NaiveDate {
        self.week_start + Duration::days(DAYS_IN_WEEK as i64 - 1)
    }

    pub fn week_dates(&self) -> Vec<NaiveDate> {
        (0..DAYS_IN_WEEK as i64)
            .map(|offset| self.week_start + Duration::days(offset))
            .collect()
    }

    /// Column index (0 = Sunday) of `date`, if it falls inside the window.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.week_start).num_days();
        if (0..DAYS_IN_WEEK as i64).contains(&offset) {
            Some(offset as usize)
        } else {
            None
        }
    }

    /// Half-open intersection test against `[start, end_exclusive)`.
    ///
    /// Zero-length intervals count when their instant lies inside the window.
    pub fn intersects(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        let window_start = self.start();
        if start >= self.end_exclusive() {
            return false;
        }
        if start < end {
            end > window_start
        } else {
            start >= window_start
        }
    }

    pub fn toggle_zoom(self) -> Self {
        Self {
            is_zoomed_in: !self.is_zoomed_in,
            ..self
        }
    }

    pub fn next_week(self) -> Self {
        Self {
            week_start: self.week_start + Duration::days(DAYS_IN_WEEK as i64),
            ..self
        }
    }

    pub fn previous_week(self) -> Self {
        Self {
            week_start: self.week_start - Duration::days(DAYS_IN_WEEK as i64),
            ..self
        }
    }
}
