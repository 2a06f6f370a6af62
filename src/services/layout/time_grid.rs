//! Coordinate system for the week timeline.
//!
//! Every distance the layout pass produces is expressed in these units; the
//! renderer maps them 1:1 onto pixels.

use serde::{Deserialize, Serialize};

use crate::models::settings::LayoutSettings;
use crate::models::view_window::DAYS_IN_WEEK;

/// Grid units derived from the zoom flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    pub is_zoomed_in: bool,
    pub hour_unit: f32,
    /// Zero on the coarse grid, which measures in hours only
    pub minute_unit: f32,
    pub day_unit: f32,
    pub item_height: f32,
    pub lane_gap: f32,
    pub top_margin: f32,
    pub min_block_width: f32,
}

impl TimeGrid {
    pub fn new(is_zoomed_in: bool) -> Self {
        Self::from_settings(&LayoutSettings::default(), is_zoomed_in)
    }

    pub fn from_settings(settings: &LayoutSettings, is_zoomed_in: bool) -> Self {
        let (hour_unit, minute_unit) = if is_zoomed_in {
            (settings.zoomed_hour_width, settings.zoomed_hour_width / 60.0)
        } else {
            (settings.coarse_hour_width, 0.0)
        };

        Self {
            is_zoomed_in,
            hour_unit,
            minute_unit,
            day_unit: hour_unit * 24.0,
            item_height: settings.item_height,
            lane_gap: settings.lane_gap,
            top_margin: settings.top_margin,
            min_block_width: settings.min_block_width,
        }
    }

    /// Vertical distance between the tops of adjacent lanes.
    pub fn lane_pitch(&self) -> f32 {
        self.item_height + self.lane_gap
    }

    pub fn lane_top(&self, lane: usize) -> f32 {
        lane as f32 * self.lane_pitch() + self.top_margin
    }

    pub fn week_width(&self) -> f32 {
        DAYS_IN_WEEK as f32 * self.day_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoomed_in_grid_measures_minutes() {
        let grid = TimeGrid::new(true);
        assert_eq!(grid.hour_unit, 240.0);
        assert_eq!(grid.minute_unit, 4.0);
        assert_eq!(grid.day_unit, 240.0 * 24.0);
    }

    #[test]
    fn test_coarse_grid_has_no_minute_unit() {
        let grid = TimeGrid::new(false);
        assert_eq!(grid.hour_unit, 40.0);
        assert_eq!(grid.minute_unit, 0.0);
        assert_eq!(grid.day_unit, 960.0);
    }

    #[test]
    fn test_lane_tops_increase_by_pitch() {
        let grid = TimeGrid::new(false);
        assert_eq!(grid.lane_top(0), 8.0);
        assert_eq!(grid.lane_top(1), 76.0);
        assert_eq!(grid.lane_top(2), 144.0);
    }

    #[test]
    fn test_custom_settings_flow_through() {
        let settings = LayoutSettings {
            zoomed_hour_width: 120.0,
            item_height: 40.0,
            lane_gap: 4.0,
            ..Default::default()
        };
        let grid = TimeGrid::from_settings(&settings, true);
        assert_eq!(grid.minute_unit, 2.0);
        assert_eq!(grid.lane_pitch(), 44.0);
        assert_eq!(grid.week_width(), 7.0 * 120.0 * 24.0);
    }
}
