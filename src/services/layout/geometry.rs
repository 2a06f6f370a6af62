//! Converts a laned segment into canvas geometry.
//!
//! Horizontal offsets are measured from the start of the segment's first day
//! column. On the fine grid they count minutes, on the coarse grid fractional
//! hours with a minimum width so short blocks stay clickable.

use chrono::Duration;

use super::time_grid::TimeGrid;
use crate::models::placed_block::PlacedBlock;
use crate::models::segment::Segment;
use crate::models::view_window::ViewWindow;
use crate::utils::date::{last_day_of_interval, minutes_since_midnight, start_of_day, MINUTES_PER_DAY};

/// Day columns covered by a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    pub day_index: usize,
    pub end_day_index: usize,
}

impl DaySpan {
    pub fn spanned_days(&self) -> usize {
        self.end_day_index - self.day_index + 1
    }

    pub fn is_multi_day(&self) -> bool {
        self.end_day_index > self.day_index
    }
}

/// Find the day columns of `segment` within `window`.
///
/// Returns `None` when the start day is not part of the window. An end day
/// outside the window, or before the start, collapses onto the start day.
pub fn locate(segment: &Segment, window: &ViewWindow) -> Option<DaySpan> {
    let day_index = window.day_index(segment.start.date())?;
    let end_day_index = window
        .day_index(last_day_of_interval(segment.start, segment.end))
        .filter(|&end| end >= day_index)
        .unwrap_or(day_index);

    Some(DaySpan {
        day_index,
        end_day_index,
    })
}

/// Left offset and width of a segment spanning `span`.
pub fn horizontal_extent(segment: &Segment, span: DaySpan, grid: &TimeGrid) -> (f32, f32) {
    let extra_days = (span.end_day_index - span.day_index) as i64;
    let start_minute = minutes_since_midnight(segment.start);
    let end_day = segment.start.date() + Duration::days(extra_days);
    let end_minute = (segment.end - start_of_day(end_day)).num_minutes();
    let total_minutes = extra_days * MINUTES_PER_DAY + end_minute - start_minute;

    if grid.is_zoomed_in {
        let left = start_minute as f32 * grid.minute_unit;
        // Zero-length blocks still get one minute of width
        let width = total_minutes.max(1) as f32 * grid.minute_unit;
        (left, width)
    } else {
        let start_hour = start_minute as f32 / 60.0;
        let total_hours = total_minutes as f32 / 60.0;
        let left = start_hour * grid.hour_unit;
        let width = (total_hours * grid.hour_unit).max(grid.min_block_width);
        (left, width)
    }
}

/// Place `segment` in `lane`. Drops the segment when its start day is not in the window.
pub fn compute_geometry(
    segment: &Segment,
    lane: usize,
    window: &ViewWindow,
    grid: &TimeGrid,
) -> Option<PlacedBlock> {
    let Some(span) = locate(segment, window) else {
        log::trace!(
            "Segment {} starts outside week of {}, dropping",
            segment.id,
            window.week_start()
        );
        return None;
    };
    Some(place(segment, span, lane, grid))
}

pub(crate) fn place(segment: &Segment, span: DaySpan, lane: usize, grid: &TimeGrid) -> PlacedBlock {
    let (left, width) = horizontal_extent(segment, span, grid);
    PlacedBlock {
        segment: segment.clone(),
        lane,
        day_index: span.day_index,
        end_day_index: span.end_day_index,
        spanned_days: span.spanned_days(),
        left,
        width,
        top: grid.lane_top(lane),
        height: grid.item_height,
    }
}
