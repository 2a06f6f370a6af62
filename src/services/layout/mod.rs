// Timeline layout service
// Items -> segments -> lanes -> placed blocks, recomputed from scratch per call

pub mod geometry;
pub mod lanes;
pub mod segmentation;
pub mod time_grid;

use crate::models::item::Item;
use crate::models::placed_block::{PlacedBlock, TimelineLayout};
use crate::models::settings::LayoutSettings;
use crate::models::view_window::ViewWindow;

use self::geometry::{locate, place, DaySpan};
use self::lanes::{assign_lanes, LaneCandidate};
use self::segmentation::segment;
use self::time_grid::TimeGrid;

/// Lays out a week of items with a fixed set of grid constants.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    settings: LayoutSettings,
}

impl LayoutEngine {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn grid(&self, window: &ViewWindow) -> TimeGrid {
        TimeGrid::from_settings(&self.settings, window.is_zoomed_in)
    }

    /// Run one full layout pass.
    ///
    /// Child items and items outside the window are ignored. Blocks come back
    /// in placement order, which callers should not rely on.
    pub fn layout(&self, items: &[Item], window: &ViewWindow) -> TimelineLayout {
        let grid = self.grid(window);
        let segments = segment(items, window);

        let located: Vec<(usize, DaySpan)> = segments
            .iter()
            .enumerate()
            .filter_map(|(index, seg)| match locate(seg, window) {
                Some(span) => Some((index, span)),
                None => {
                    log::trace!("Segment {} has no day in the window, dropping", seg.id);
                    None
                }
            })
            .collect();

        let candidates: Vec<LaneCandidate<'_>> = located
            .iter()
            .map(|&(index, days)| {
                let seg = &segments[index];
                LaneCandidate {
                    id: &seg.id,
                    start: seg.start,
                    end: seg.end,
                    days,
                    duration_minutes: seg.duration_minutes(),
                }
            })
            .collect();

        let assignment = assign_lanes(&candidates);

        let blocks: Vec<PlacedBlock> = assignment
            .order
            .iter()
            .map(|&candidate| {
                let (index, days) = located[candidate];
                place(&segments[index], days, assignment.placements[candidate], &grid)
            })
            .collect();

        log::debug!(
            "Laid out week of {} (zoomed: {}): {} items, {} segments, {} lanes, {} blocks",
            window.week_start(),
            window.is_zoomed_in,
            items.len(),
            segments.len(),
            assignment.lane_count(),
            blocks.len()
        );

        TimelineLayout {
            blocks,
            lane_count: assignment.lane_count(),
            grid,
        }
    }
}

/// Lay out `items` for `window` with the default grid constants.
pub fn layout_week(items: &[Item], window: &ViewWindow) -> Vec<PlacedBlock> {
    LayoutEngine::default().layout(items, window).blocks
}
