// Test fixtures - reusable test data
// Provides consistent weeks and items across all test files
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use timeline_layout::{Item, ViewWindow};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Sunday, March 2, 2025
    pub fn week_of_march_2_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
    }

    /// A time in the week of March 2, 2025 (day 2 = Sunday ... day 8 = Saturday)
    pub fn march(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    /// Sunday, December 28, 2025 (week crosses into 2026)
    pub fn new_year_week() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 28).unwrap()
    }
}

/// Sample windows for testing
pub mod windows {
    use super::*;

    pub fn coarse() -> ViewWindow {
        ViewWindow::new(dates::week_of_march_2_2025(), false).unwrap()
    }

    pub fn zoomed() -> ViewWindow {
        ViewWindow::new(dates::week_of_march_2_2025(), true).unwrap()
    }
}

/// Sample items for testing
pub mod items {
    use super::dates::march;
    use super::*;

    pub fn item(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Item {
        Item::new(id, start, end).unwrap()
    }

    /// Tuesday 10:00 - 11:00
    pub fn tuesday_meeting() -> Item {
        item("tuesday-meeting", march(4, 10, 0), march(4, 11, 0))
            .with_title("Team Meeting")
            .with_category("work")
    }

    /// Friday 22:00 through the following Monday 02:00
    pub fn weekend_deploy() -> Item {
        item("weekend-deploy", march(7, 22, 0), march(10, 2, 0)).with_title("Weekend Deploy")
    }

    /// A busy week: overlapping, back-to-back, overnight and cross-week items
    pub fn busy_week() -> Vec<Item> {
        vec![
            item("standup-mon", march(3, 9, 0), march(3, 9, 15)),
            item("standup-tue", march(4, 9, 0), march(4, 9, 15)),
            item("standup-wed", march(5, 9, 0), march(5, 9, 15)),
            item("review", march(4, 9, 0), march(4, 10, 0)),
            item("focus", march(4, 13, 0), march(4, 17, 0)),
            item("offsite", march(5, 8, 0), march(6, 18, 0)),
            item("on-call", march(1, 18, 0), march(3, 8, 0)),
            item("retro", march(7, 15, 0), march(7, 16, 0)),
            weekend_deploy(),
            tuesday_meeting(),
        ]
    }
}
