// Placed block module
// Final geometry handed to the renderer

use serde::{Deserialize, Serialize};

use super::segment::Segment;
use crate::services::layout::time_grid::TimeGrid;

/// Placement of one segment on the week canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub segment: Segment,
    pub lane: usize,
    /// Day column (0 = Sunday) holding the segment's start
    pub day_index: usize,
    pub end_day_index: usize,
    pub spanned_days: usize,
    /// Offset from the start of `day_index`'s column
    pub left: f32,
    pub width: f32,
    pub top: f32,
    pub height: f32,
}

impl PlacedBlock {
    /// Horizontal offset from the left edge of the whole week canvas.
    pub fn canvas_left(&self, grid: &TimeGrid) -> f32 {
        self.day_index as f32 * grid.day_unit + self.left
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    /// Blocks in placement order; callers should index by item id
    pub blocks: Vec<PlacedBlock>,
    pub lane_count: usize,
    pub grid: TimeGrid,
}

impl TimelineLayout {
    pub fn canvas_width(&self) -> f32 {
        self.grid.week_width()
    }

    pub fn canvas_height(&self) -> f32 {
        self.lane_count as f32 * self.grid.lane_pitch()
    }

    pub fn blocks_for_item<'a>(&'a self, item_id: &'a str) -> impl Iterator<Item = &'a PlacedBlock> + 'a {
        self.blocks
            .iter()
            .filter(move |block| block.segment.item_id == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
