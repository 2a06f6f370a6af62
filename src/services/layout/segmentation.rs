//! Clips items to the visible week and flags the pieces that were cut.
//!
//! Each root item that intersects the window yields exactly one segment per
//! window. An item is marked split when it starts before the window, ends
//! after it, or touches more than one calendar day inside it. Items crossing
//! into other weeks reappear as their own segment when that week is laid out.

use chrono::Duration;

use crate::models::item::Item;
use crate::models::segment::Segment;
use crate::models::view_window::{ViewWindow, DAYS_IN_WEEK};
use crate::utils::date::{days_into_week, last_day_of_interval};

/// Segment every root item that intersects `window`.
pub fn segment(items: &[Item], window: &ViewWindow) -> Vec<Segment> {
    items
        .iter()
        .filter(|item| {
            if item.is_root() {
                true
            } else {
                log::trace!("Skipping child item {} in timeline pass", item.id);
                false
            }
        })
        .filter_map(|item| segment_item(item, window))
        .collect()
}

/// Clamp a single item to `window`. Returns `None` when it lies outside.
pub fn segment_item(item: &Item, window: &ViewWindow) -> Option<Segment> {
    // Inverted intervals are laid out as zero-length at their start
    let start = item.start;
    let end = if item.end < item.start {
        log::warn!(
            "Item {} ends before it starts ({} < {}), treating as zero length",
            item.id,
            item.end,
            item.start
        );
        item.start
    } else {
        item.end
    };

    if !window.intersects(start, end) {
        log::trace!("Item {} lies outside week of {}", item.id, window.week_start());
        return None;
    }

    let starts_before = start < window.start();
    let ends_after = end > window.end_exclusive();
    let is_multi_day = start.date() != last_day_of_interval(start, end);
    let is_split = starts_before || ends_after || is_multi_day;

    let segment_index = week_number(item, window);

    if !is_split {
        return Some(Segment {
            id: item.id.clone(),
            item_id: item.id.clone(),
            start,
            end,
            original_start: item.start,
            original_end: item.end,
            is_split: false,
            segment_index,
            segment_count: 1,
            is_final_segment: true,
            metadata: item.metadata.clone(),
        });
    }

    let clamped_start = if starts_before { window.start() } else { start };
    let clamped_end = if ends_after { window.last_instant() } else { end };
    let is_multi_week = starts_before || ends_after;

    Some(Segment {
        id: if is_multi_week {
            format!("{}_week_{}", item.id, window.week_start())
        } else {
            item.id.clone()
        },
        item_id: item.id.clone(),
        start: clamped_start,
        end: clamped_end,
        original_start: item.start,
        original_end: item.end,
        is_split: true,
        segment_index,
        segment_count: weeks_spanned(item).max(segment_index),
        is_final_segment: clamped_end == item.end,
        metadata: item.metadata.clone(),
    })
}

/// Week-count heuristic: whole item duration in weeks, rounded up, at least 1.
fn weeks_spanned(item: &Item) -> u32 {
    let week_seconds = Duration::days(DAYS_IN_WEEK as i64).num_seconds();
    let seconds = (item.end - item.start).num_seconds().max(0);
    let weeks = (seconds + week_seconds - 1) / week_seconds;
    weeks.max(1) as u32
}

/// 1-based position of `window` counted from the week holding the item's start.
///
/// Counted from the item's own date so starts at the edge of chrono's range
/// never need an earlier Sunday.
fn week_number(item: &Item, window: &ViewWindow) -> u32 {
    let start_date = item.start.date();
    let days = (window.week_start() - start_date).num_days() + days_into_week(start_date, 0);
    let weeks = days / DAYS_IN_WEEK as i64;
    u32::try_from(weeks.max(0) + 1).unwrap_or(u32::MAX)
}
