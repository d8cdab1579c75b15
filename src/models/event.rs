use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::{DateRange, GridCell};

fn default_space_required() -> u32 {
    1
}

/// A planting scheduled in a bed, as recorded by the external planner.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingEvent {
    pub id: String,
    pub plant_id: String,
    pub garden_bed_id: String,
    /// Top-left anchor column. Unplaced events have no position.
    pub position_x: Option<u32>,
    pub position_y: Option<u32>,
    /// Precomputed footprint cell count.
    #[serde(default = "default_space_required")]
    pub space_required: u32,
    pub variety: Option<String>,
    /// Indoor sowing; never occupies the bed.
    pub seed_start_date: Option<NaiveDate>,
    pub transplant_date: Option<NaiveDate>,
    pub direct_seed_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
}

impl PlantingEvent {
    pub fn anchor(&self) -> Option<GridCell> {
        match (self.position_x, self.position_y) {
            (Some(x), Some(y)) => Some(GridCell::new(x, y)),
            _ => None,
        }
    }

    /// Day the planting enters the bed. An indoor seed start alone does not count.
    pub fn in_ground_date(&self) -> Option<NaiveDate> {
        self.direct_seed_date.or(self.transplant_date)
    }

    /// The span during which this planting holds bed space, or `None` when it
    /// is not scheduled in the ground yet.
    pub fn in_ground_range(&self) -> Option<DateRange> {
        let start = self.in_ground_date()?;
        let end = self.expected_harvest_date?;
        DateRange::new(start, end).ok()
    }

    /// `space_required` with the zero case read as a single cell.
    pub fn cell_count(&self) -> u32 {
        self.space_required.max(1)
    }
}
