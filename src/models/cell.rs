use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::GridCell;

/// A grid cell held by a planting during the queried window.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupiedCell {
    pub x: u32,
    pub y: u32,
    pub event_id: String,
    pub plant_id: String,
    /// Absent when the plant is missing from the catalog.
    pub plant_name: Option<String>,
    pub variety: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl OccupiedCell {
    pub fn cell(&self) -> GridCell {
        GridCell::new(self.x, self.y)
    }
}

/// A free grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AvailableCell {
    pub x: u32,
    pub y: u32,
}

impl AvailableCell {
    pub fn cell(&self) -> GridCell {
        GridCell::new(self.x, self.y)
    }
}

impl From<GridCell> for AvailableCell {
    fn from(c: GridCell) -> Self {
        Self { x: c.x, y: c.y }
    }
}

/// A cell claimed by more than one planting in the same window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellConflict {
    pub x: u32,
    pub y: u32,
    pub event_ids: Vec<String>,
}

/// Footprint size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootprintSize {
    pub cols: u32,
    pub rows: u32,
}

impl FootprintSize {
    pub fn square(side: u32) -> Self {
        Self {
            cols: side,
            rows: side,
        }
    }

    /// Cells in the block, saturating at `u32::MAX`.
    pub fn cell_count(&self) -> u32 {
        self.cols.saturating_mul(self.rows)
    }

    /// Whether the block anchored at `anchor` stays inside a
    /// `width × height` grid.
    pub fn fits_within(&self, anchor: GridCell, width: u32, height: u32) -> bool {
        u64::from(anchor.x) + u64::from(self.cols) <= u64::from(width)
            && u64::from(anchor.y) + u64::from(self.rows) <= u64::from(height)
    }
}

/// Where a new planting can go: every valid top-left anchor, plus the union
/// of cells covered by the blocks at those anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementSites {
    pub footprint: FootprintSize,
    pub anchors: Vec<GridCell>,
    pub cells: Vec<AvailableCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedUsage {
    pub total_cells: usize,
    pub occupied_cells: usize,
    pub available_cells: usize,
    /// Occupied share of the grid, 0.0 to 1.0.
    pub utilization: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_count_saturates() {
        assert_eq!(FootprintSize::square(3).cell_count(), 9);
        assert_eq!(FootprintSize::square(65_536).cell_count(), u32::MAX);
        assert_eq!(
            FootprintSize { cols: u32::MAX, rows: 2 }.cell_count(),
            u32::MAX
        );
    }

    #[test]
    fn test_fits_within_grid() {
        let size = FootprintSize { cols: 2, rows: 3 };
        assert!(size.fits_within(GridCell::new(0, 0), 2, 3));
        assert!(!size.fits_within(GridCell::new(1, 0), 2, 3));
        assert!(!size.fits_within(GridCell::new(0, 1), 2, 3));
        assert!(!FootprintSize::square(u32::MAX).fits_within(GridCell::new(u32::MAX, 0), u32::MAX, u32::MAX));
    }
}
