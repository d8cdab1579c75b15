use std::collections::BTreeMap;

use log::{debug, trace, warn};

use crate::data::catalog::PlantCatalog;
use crate::logic::footprint::cells_within;
use crate::logic::spacing::SpacingRule;
use crate::models::{
    bed::GardenBed,
    cell::{CellConflict, OccupiedCell},
    event::PlantingEvent,
    DateRange, GridCell,
};

/// Works out which cells of a bed are held by which plantings.
///
/// Nothing is cached: every call recomputes from the events it is given.
pub struct OccupancyIndex<'a, C: PlantCatalog + ?Sized> {
    rules: &'a SpacingRule,
    catalog: &'a C,
}

impl<'a, C: PlantCatalog + ?Sized> OccupancyIndex<'a, C> {
    pub fn new(rules: &'a SpacingRule, catalog: &'a C) -> Self {
        Self { rules, catalog }
    }

    /// Every cell of `bed` held during `range` by one of `events`, one entry
    /// per (cell, event) pair, sorted by `(x, y)` then start date and event id.
    ///
    /// Events for other beds, unplaced events and events without both an
    /// in-ground date and a harvest date are skipped. Overlapping claims are
    /// all reported; see [`find_conflicts`].
    pub fn occupied_cells(
        &self,
        bed_id: &str,
        range: &DateRange,
        events: &[PlantingEvent],
        bed: &GardenBed,
    ) -> Vec<OccupiedCell> {
        if bed.is_degenerate() {
            debug!("Bed '{bed_id}' has an empty grid, nothing can be occupied");
            return Vec::new();
        }

        let mut occupied = Vec::new();
        for event in events.iter().filter(|e| e.garden_bed_id == bed_id) {
            let Some(anchor) = event.anchor() else {
                continue;
            };
            let Some(in_ground) = event.in_ground_range() else {
                debug!(
                    "Event '{}' has no in-ground schedule, skipped",
                    event.id
                );
                continue;
            };
            if !in_ground.overlaps(range) {
                continue;
            }

            let plant = self.catalog.plant(&event.plant_id);
            if plant.is_none() {
                warn!(
                    "Plant '{}' of event '{}' not found in catalog, using its recorded footprint",
                    event.plant_id, event.id
                );
            }
            let profile = plant
                .as_ref()
                .map(|p| self.rules.profile(p, bed.planning_method));

            let cells = cells_within(anchor, event.cell_count(), bed, profile);
            if cells.is_empty() {
                debug!(
                    "Event '{}' is anchored outside the grid at ({}, {}), skipped",
                    event.id, anchor.x, anchor.y
                );
            }
            for cell in cells {
                occupied.push(OccupiedCell {
                    x: cell.x,
                    y: cell.y,
                    event_id: event.id.clone(),
                    plant_id: event.plant_id.clone(),
                    plant_name: plant.as_ref().map(|p| p.name.clone()),
                    variety: event.variety.clone(),
                    start_date: in_ground.start(),
                    end_date: in_ground.end(),
                });
            }
        }

        occupied.sort_by(|a, b| {
            (a.x, a.y, a.start_date, &a.event_id).cmp(&(b.x, b.y, b.start_date, &b.event_id))
        });
        trace!(
            "Bed '{bed_id}' {}..={}: {} occupied cell entries",
            range.start(),
            range.end(),
            occupied.len()
        );
        occupied
    }
}

/// Cells claimed by more than one event, sorted by `(x, y)`.
pub fn find_conflicts(occupied: &[OccupiedCell]) -> Vec<CellConflict> {
    let mut claims: BTreeMap<GridCell, Vec<String>> = BTreeMap::new();
    for cell in occupied {
        let owners = claims.entry(cell.cell()).or_default();
        if !owners.contains(&cell.event_id) {
            owners.push(cell.event_id.clone());
        }
    }
    claims
        .into_iter()
        .filter(|(_, owners)| owners.len() > 1)
        .map(|(cell, mut event_ids)| {
            event_ids.sort();
            CellConflict {
                x: cell.x,
                y: cell.y,
                event_ids,
            }
        })
        .collect()
}
