use serde::{Deserialize, Serialize};

/// Default cell edge in inches (one square foot).
pub const DEFAULT_GRID_SIZE: u32 = 12;

const INCHES_PER_FOOT: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanningMethod {
    SquareFoot,
    Row,
    #[serde(rename = "migardener")]
    MiGardener,
    Intensive,
    RaisedBed,
}

fn default_grid_size() -> u32 {
    DEFAULT_GRID_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenBed {
    pub id: String,
    /// Width in feet.
    pub width: f64,
    /// Length in feet.
    pub length: f64,
    /// Inches per grid cell.
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,
    pub planning_method: PlanningMethod,
}

impl GardenBed {
    /// Number of cells along the bed width (x axis).
    pub fn grid_width(&self) -> u32 {
        cells_along(self.width, self.grid_size)
    }

    /// Number of cells along the bed length (y axis).
    pub fn grid_height(&self) -> u32 {
        cells_along(self.length, self.grid_size)
    }

    /// True when the grid has no cells, in which case every query answers
    /// with empty results.
    pub fn is_degenerate(&self) -> bool {
        self.grid_width() == 0 || self.grid_height() == 0
    }

    pub fn total_cells(&self) -> usize {
        self.grid_width() as usize * self.grid_height() as usize
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.grid_width() && y < self.grid_height()
    }
}

fn cells_along(feet: f64, grid_size: u32) -> u32 {
    if grid_size == 0 || !feet.is_finite() || feet <= 0.0 {
        return 0;
    }
    (feet * INCHES_PER_FOOT / grid_size as f64).floor() as u32
}
