// Settings module
// Grid constants for the timeline, loadable from a TOML file

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}

/// Layout constants, in the renderer's distance unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Width of one hour on the fine (minute) grid
    pub zoomed_hour_width: f32,
    /// Width of one hour on the coarse (hour) grid
    pub coarse_hour_width: f32,
    pub item_height: f32,
    pub lane_gap: f32,
    pub top_margin: f32,
    /// Minimum block width on the coarse grid
    pub min_block_width: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            zoomed_hour_width: 240.0,
            coarse_hour_width: 40.0,
            item_height: 60.0,
            lane_gap: 8.0,
            top_margin: 8.0,
            min_block_width: 120.0,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("zoomed_hour_width", self.zoomed_hour_width),
            ("coarse_hour_width", self.coarse_hour_width),
            ("item_height", self.item_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("lane_gap", self.lane_gap),
            ("top_margin", self.top_margin),
            ("min_block_width", self.min_block_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::Negative { field, value });
            }
        }

        Ok(())
    }
}
