// Display text for placed segments
// Renderers pick between these based on the segment flags

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::models::segment::Segment;
use crate::utils::date::last_day_of_interval;

/// Time range text for a block, with optional date and month context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangeLabel {
    pub time: String,
    pub dates: Option<String>,
    /// Month span, present only when a split item crosses months
    pub months: Option<String>,
}

/// Format a time as "9:05 AM".
pub fn format_time(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Format a date as "04/03/2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Label a segment. Split segments describe the whole item, not the clamped piece.
pub fn format_time_range(segment: &Segment) -> TimeRangeLabel {
    let (start, end) = if segment.is_multi_week() {
        (segment.original_start, segment.original_end)
    } else {
        (segment.start, segment.end)
    };

    let time = format!("{} – {}", format_time(start), format_time(end));
    let is_multi_day = start.date() != last_day_of_interval(start, end);

    let dates = (is_multi_day || segment.is_multi_week())
        .then(|| format!("{} – {}", format_date(start.date()), format_date(end.date())));

    let months = (segment.is_multi_week()
        && (start.month() != end.month() || start.year() != end.year()))
    .then(|| {
        let year_suffix = if start.year() != end.year() {
            format!(" {}", end.year())
        } else {
            String::new()
        };
        format!("{} – {}{}", start.format("%B"), end.format("%B"), year_suffix)
    });

    TimeRangeLabel {
        time,
        dates,
        months,
    }
}

/// Text for the column of `day` inside a multi-day item.
pub fn format_range_for_day(segment: &Segment, day: NaiveDate) -> String {
    let start = segment.original_start;
    let end = segment.original_end;
    let last_day = last_day_of_interval(start, end);

    if start.date() == last_day {
        return format!("{} – {}", format_time(start), format_time(end));
    }

    let is_start = day == start.date();
    let is_end = day == last_day;
    match (is_start, is_end) {
        (true, true) => format!("{} – {}", format_time(start), format_time(end)),
        (true, false) => format!("Start: {} {}", format_date(start.date()), format_time(start)),
        (false, true) => format!("End: {} {}", format_date(end.date()), format_time(end)),
        (false, false) => "continues...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::Item;
    use crate::models::view_window::ViewWindow;
    use crate::services::layout::segmentation::segment_item;

    fn at(m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn seg(start: NaiveDateTime, end: NaiveDateTime, week_of: NaiveDate) -> Segment {
        segment_item(
            &Item::unchecked("a", start, end),
            &ViewWindow::containing(week_of, false),
        )
        .unwrap()
    }

    #[test]
    fn test_single_day_label() {
        let s = seg(at(3, 4, 9, 5), at(3, 4, 14, 30), NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        let label = format_time_range(&s);
        assert_eq!(label.time, "9:05 AM – 2:30 PM");
        assert_eq!(label.dates, None);
        assert_eq!(label.months, None);
    }

    #[test]
    fn test_multi_day_label_has_dates() {
        let s = seg(at(3, 4, 22, 0), at(3, 5, 2, 0), NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        let label = format_time_range(&s);
        assert_eq!(label.dates.as_deref(), Some("04/03/2025 – 05/03/2025"));
        assert_eq!(label.months, None);
    }

    #[test]
    fn test_split_label_uses_original_interval_and_months() {
        // Friday, Feb 28 through Tuesday, Mar 4, viewed from the second week
        let s = seg(at(2, 28, 8, 0), at(3, 4, 17, 0), NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
        let label = format_time_range(&s);
        assert_eq!(label.time, "8:00 AM – 5:00 PM");
        assert_eq!(label.dates.as_deref(), Some("28/02/2025 – 04/03/2025"));
        assert_eq!(label.months.as_deref(), Some("February – March"));
    }

    #[test]
    fn test_range_for_day() {
        let s = seg(at(3, 3, 22, 0), at(3, 6, 2, 0), NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
        assert_eq!(format_range_for_day(&s, day(3)), "Start: 03/03/2025 10:00 PM");
        assert_eq!(format_range_for_day(&s, day(4)), "continues...");
        assert_eq!(format_range_for_day(&s, day(6)), "End: 06/03/2025 2:00 AM");
    }
}
