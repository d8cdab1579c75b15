use chrono::NaiveDate;
use log::{debug, warn};

use crate::config::EngineConfig;
use crate::data::catalog::PlantCatalog;
use crate::logic::{
    availability::{available_cells, bed_usage, candidate_anchors, covered_cells, fits_at},
    footprint::footprint_size,
    occupancy::{find_conflicts, OccupancyIndex},
    spacing::SpacingRule,
    succession::{plan_successions, SuccessionPlan},
};
use crate::models::{
    bed::GardenBed,
    cell::{AvailableCell, BedUsage, CellConflict, FootprintSize, OccupiedCell, PlacementSites},
    event::PlantingEvent,
    DateRange, GridCell,
};

/// Entry point wiring spacing rules, occupancy and availability together
/// for one plant catalog and one set of override tables.
///
/// Every query is computed from the events passed in; the engine holds no
/// per-bed state. Callers placing plantings concurrently in the same bed
/// must serialize their writes themselves.
pub struct AllocationEngine<C: PlantCatalog> {
    rules: SpacingRule,
    catalog: C,
    season_length_days: u32,
}

impl<C: PlantCatalog> AllocationEngine<C> {
    pub fn new(config: EngineConfig, catalog: C) -> Self {
        Self {
            rules: SpacingRule::new(config.tables),
            catalog,
            season_length_days: config.season_length_days,
        }
    }

    pub fn rules(&self) -> &SpacingRule {
        &self.rules
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Block one planting of `plant_id` needs in `bed`. Unknown plants get a
    /// single cell.
    pub fn footprint_for(&self, bed: &GardenBed, plant_id: &str) -> FootprintSize {
        let method = bed.planning_method;
        match self.catalog.plant(plant_id) {
            Some(plant) => {
                let count = self.rules.footprint_cell_count(&plant, bed.grid_size, method);
                let profile = self.rules.profile(&plant, method);
                footprint_size(count, method, bed.grid_size, Some(profile))
            }
            None => {
                warn!("Plant '{plant_id}' not found in catalog, using a single-cell footprint");
                FootprintSize::square(1)
            }
        }
    }

    pub fn occupied_cells(
        &self,
        bed: &GardenBed,
        range: &DateRange,
        events: &[PlantingEvent],
    ) -> Vec<OccupiedCell> {
        OccupancyIndex::new(&self.rules, &self.catalog).occupied_cells(&bed.id, range, events, bed)
    }

    pub fn available_cells(
        &self,
        bed: &GardenBed,
        range: &DateRange,
        events: &[PlantingEvent],
    ) -> Vec<AvailableCell> {
        available_cells(bed, &self.occupied_cells(bed, range, events))
    }

    pub fn bed_usage(&self, bed: &GardenBed, range: &DateRange, events: &[PlantingEvent]) -> BedUsage {
        bed_usage(bed, &self.occupied_cells(bed, range, events))
    }

    pub fn conflicts(
        &self,
        bed: &GardenBed,
        range: &DateRange,
        events: &[PlantingEvent],
    ) -> Vec<CellConflict> {
        find_conflicts(&self.occupied_cells(bed, range, events))
    }

    /// Every place a new planting of `plant_id` could go in `bed` during
    /// `range`. The choice among sites is left to the caller.
    pub fn placement_sites(
        &self,
        bed: &GardenBed,
        plant_id: &str,
        range: &DateRange,
        events: &[PlantingEvent],
    ) -> PlacementSites {
        let footprint = self.footprint_for(bed, plant_id);
        let free = self.available_cells(bed, range, events);
        let anchors = candidate_anchors(&free, footprint);
        let cells = covered_cells(&anchors, footprint);
        debug!(
            "Bed '{}': {} sites for '{plant_id}' ({}x{})",
            bed.id,
            anchors.len(),
            footprint.cols,
            footprint.rows
        );
        PlacementSites {
            footprint,
            anchors,
            cells,
        }
    }

    /// Whether a planting of `plant_id` anchored at `anchor` would sit inside
    /// the grid on cells free for the whole of `range`.
    pub fn can_place(
        &self,
        bed: &GardenBed,
        plant_id: &str,
        anchor: GridCell,
        range: &DateRange,
        events: &[PlantingEvent],
    ) -> bool {
        let footprint = self.footprint_for(bed, plant_id);
        let inside = footprint.fits_within(anchor, bed.grid_width(), bed.grid_height());
        inside && fits_at(&self.available_cells(bed, range, events), anchor, footprint)
    }

    /// Succession plan for `plant_id` over the configured season length, or
    /// `None` for unknown plants and crops not suited to succession.
    pub fn succession_plan(&self, plant_id: &str, first_sowing: NaiveDate) -> Option<SuccessionPlan> {
        let plant = self.catalog.plant(plant_id)?;
        plan_successions(&plant, first_sowing, self.season_length_days)
    }
}
