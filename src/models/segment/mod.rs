// Segment module
// Window-clamped view of one item, alive for a single layout pass

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::item::ItemMetadata;
use crate::utils::date::rounded_minutes_between;

/// A clipped or split piece of an item confined to the current window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Identifies this piece: the item id, or `{item_id}_week_{week_start}` when split
    pub id: String,
    pub item_id: String,
    /// Effective start, clamped to the window
    pub start: NaiveDateTime,
    /// Effective end, clamped to the window
    pub end: NaiveDateTime,
    /// The item's own interval, for "continues" style display text
    pub original_start: NaiveDateTime,
    pub original_end: NaiveDateTime,
    pub is_split: bool,
    /// 1-based week number of this piece relative to the item's first week
    pub segment_index: u32,
    pub segment_count: u32,
    /// True for the chronologically last piece
    pub is_final_segment: bool,
    pub metadata: ItemMetadata,
}

impl Segment {
    /// Effective duration in rounded minutes.
    pub fn duration_minutes(&self) -> i64 {
        rounded_minutes_between(self.start, self.end)
    }

    /// Whether the item reaches beyond this window in either direction.
    pub fn is_multi_week(&self) -> bool {
        self.segment_count > 1 || self.continues_from_previous() || self.continues_into_next()
    }

    /// Whether this piece was cut at the window's leading edge.
    pub fn continues_from_previous(&self) -> bool {
        self.start > self.original_start
    }

    /// Whether this piece was cut at the window's trailing edge.
    pub fn continues_into_next(&self) -> bool {
        !self.is_final_segment
    }
}
