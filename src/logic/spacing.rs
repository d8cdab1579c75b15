use log::warn;

use crate::data::catalog::PlantCatalog;
use crate::data::overrides::SpacingTables;
use crate::models::bed::PlanningMethod;
use crate::models::cell::FootprintSize;
use crate::models::plant::Plant;

/// Area efficiency of hexagonal packing relative to a square lattice
/// with the same on-center distance (sqrt(3) / 2).
pub const HEX_PACKING_FACTOR: f64 = 0.866;

/// How a plant's spacing reads for a given planting method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpacingProfile {
    /// Row crops: plants `plant_inches` apart within rows `row_inches` apart.
    RowBased { row_inches: f64, plant_inches: f64 },
    /// The same spacing on both axes.
    Uniform { spacing_inches: f64 },
}

impl SpacingProfile {
    /// Bounding rectangle of one planting: columns follow in-row spacing,
    /// rows follow row spacing.
    pub fn footprint(&self, grid_size: u32) -> FootprintSize {
        match *self {
            SpacingProfile::RowBased {
                row_inches,
                plant_inches,
            } => FootprintSize {
                cols: cells_spanned(plant_inches, grid_size),
                rows: cells_spanned(row_inches, grid_size),
            },
            SpacingProfile::Uniform { spacing_inches } => {
                FootprintSize::square(cells_spanned(spacing_inches, grid_size))
            }
        }
    }
}

/// Number of cells a distance spans, never less than one.
pub fn cells_spanned(inches: f64, grid_size: u32) -> u32 {
    if grid_size == 0 || !inches.is_finite() || inches <= 0.0 {
        return 1;
    }
    ((inches / grid_size as f64).ceil() as u32).max(1)
}

/// Side of the smallest square block holding `cell_count` cells.
pub fn cells_per_side(cell_count: u32) -> u32 {
    let count = u64::from(cell_count.max(1));
    let mut side = (count as f64).sqrt().ceil() as u64;
    // Guard against float error around perfect squares.
    while side > 1 && (side - 1) * (side - 1) >= count {
        side -= 1;
    }
    while side * side < count {
        side += 1;
    }
    side as u32
}

/// Converts plant spacing into grid footprints, per planting method.
#[derive(Debug, Clone, Default)]
pub struct SpacingRule {
    tables: SpacingTables,
}

impl SpacingRule {
    pub fn new(tables: SpacingTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &SpacingTables {
        &self.tables
    }

    /// Number of grid cells one planting of `plant` needs. Always at least 1.
    pub fn footprint_cell_count(&self, plant: &Plant, grid_size: u32, method: PlanningMethod) -> u32 {
        match method {
            PlanningMethod::SquareFoot | PlanningMethod::RaisedBed => {
                match self.tables.square_foot.get(&plant.id) {
                    Some(&cells) => cells.max(1),
                    None => {
                        let side = cells_spanned(plant.spacing, grid_size);
                        side.saturating_mul(side)
                    }
                }
            }
            PlanningMethod::Row => {
                let side = cells_spanned(plant.spacing, grid_size);
                side.saturating_mul(side)
            }
            PlanningMethod::MiGardener => self.profile(plant, method).footprint(grid_size).cell_count(),
            PlanningMethod::Intensive => {
                if grid_size == 0 {
                    return 1;
                }
                let on_center = self.on_center_spacing(plant);
                let area_per_plant = on_center * on_center * HEX_PACKING_FACTOR;
                let cell_area = (grid_size as f64) * (grid_size as f64);
                let cells = (area_per_plant / cell_area).ceil();
                if cells.is_finite() && cells >= 1.0 {
                    cells as u32
                } else {
                    1
                }
            }
        }
    }

    /// Like [`footprint_cell_count`](Self::footprint_cell_count), resolving the
    /// plant through `catalog`. An unknown plant gets a single cell.
    pub fn footprint_cell_count_for_id<C: PlantCatalog + ?Sized>(
        &self,
        catalog: &C,
        plant_id: &str,
        grid_size: u32,
        method: PlanningMethod,
    ) -> u32 {
        match catalog.plant(plant_id) {
            Some(plant) => self.footprint_cell_count(&plant, grid_size, method),
            None => {
                warn!("Plant '{plant_id}' not found in catalog, using a single-cell footprint");
                1
            }
        }
    }

    /// Resolves the spacing pair the method works with for `plant`.
    ///
    /// Only MIGardener distinguishes rows; a missing or zero row spacing
    /// there means the crop is grown without rows.
    pub fn profile(&self, plant: &Plant, method: PlanningMethod) -> SpacingProfile {
        match method {
            PlanningMethod::MiGardener => {
                let (row, plant_spacing) = match self.tables.migardener.get(&plant.id) {
                    Some(pair) => (pair.row_spacing, pair.plant_spacing),
                    None => (plant.row_spacing, plant.spacing),
                };
                match row {
                    Some(row_inches) if row_inches > 0.0 => SpacingProfile::RowBased {
                        row_inches,
                        plant_inches: plant_spacing,
                    },
                    _ => SpacingProfile::Uniform {
                        spacing_inches: plant_spacing,
                    },
                }
            }
            PlanningMethod::Intensive => SpacingProfile::Uniform {
                spacing_inches: self.on_center_spacing(plant),
            },
            PlanningMethod::SquareFoot | PlanningMethod::RaisedBed | PlanningMethod::Row => {
                SpacingProfile::Uniform {
                    spacing_inches: plant.spacing,
                }
            }
        }
    }

    fn on_center_spacing(&self, plant: &Plant) -> f64 {
        self.tables
            .intensive
            .get(&plant.id)
            .copied()
            .unwrap_or(plant.spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::InMemoryCatalog;
    use crate::data::overrides::MiGardenerSpacing;
    use crate::models::plant::PlantCategory;

    fn plant(id: &str, spacing: f64, row_spacing: Option<f64>) -> Plant {
        Plant {
            id: id.into(),
            name: id.into(),
            spacing,
            row_spacing,
            days_to_maturity: Some(60),
            category: PlantCategory::Vegetable,
        }
    }

    fn builtin() -> SpacingRule {
        SpacingRule::new(SpacingTables::builtin())
    }

    fn bare() -> SpacingRule {
        SpacingRule::new(SpacingTables::empty())
    }

    #[test]
    fn test_cells_per_side() {
        assert_eq!(cells_per_side(0), 1);
        assert_eq!(cells_per_side(1), 1);
        assert_eq!(cells_per_side(2), 2);
        assert_eq!(cells_per_side(4), 2);
        assert_eq!(cells_per_side(5), 3);
        assert_eq!(cells_per_side(9), 3);
        assert_eq!(cells_per_side(10), 4);
    }

    #[test]
    fn test_cells_spanned_never_zero() {
        assert_eq!(cells_spanned(0.0, 12), 1);
        assert_eq!(cells_spanned(6.0, 12), 1);
        assert_eq!(cells_spanned(12.0, 12), 1);
        assert_eq!(cells_spanned(13.0, 12), 2);
        assert_eq!(cells_spanned(24.0, 0), 1, "A zero grid size must not divide by zero");
    }

    #[test]
    fn test_square_foot_uses_override() {
        // 24in spacing would be 2×2 cells, but SFG says one tomato per square.
        let tomato = plant("tomato", 24.0, Some(36.0));
        assert_eq!(builtin().footprint_cell_count(&tomato, 12, PlanningMethod::SquareFoot), 1);
    }

    #[test]
    fn test_square_foot_falls_back_to_spacing() {
        let okra = plant("okra", 18.0, None);
        // ceil(18 / 12) = 2 → 2² = 4
        assert_eq!(builtin().footprint_cell_count(&okra, 12, PlanningMethod::SquareFoot), 4);
    }

    #[test]
    fn test_raised_bed_sizes_like_square_foot() {
        let squash = plant("winter-squash", 48.0, None);
        let rule = builtin();
        assert_eq!(
            rule.footprint_cell_count(&squash, 12, PlanningMethod::RaisedBed),
            rule.footprint_cell_count(&squash, 12, PlanningMethod::SquareFoot)
        );
    }

    #[test]
    fn test_row_method_ignores_row_spacing() {
        let tomato = plant("tomato", 24.0, Some(36.0));
        assert_eq!(builtin().footprint_cell_count(&tomato, 12, PlanningMethod::Row), 4);
        assert_eq!(builtin().footprint_cell_count(&tomato, 6, PlanningMethod::Row), 16);
    }

    #[test]
    fn test_migardener_row_crop_is_rectangular() {
        // Override: plants 24in apart, rows 36in apart → 2 cols × 3 rows
        let tomato = plant("tomato", 24.0, Some(36.0));
        let rule = builtin();
        assert_eq!(
            rule.profile(&tomato, PlanningMethod::MiGardener),
            SpacingProfile::RowBased {
                row_inches: 36.0,
                plant_inches: 24.0
            }
        );
        assert_eq!(rule.footprint_cell_count(&tomato, 12, PlanningMethod::MiGardener), 6);
    }

    #[test]
    fn test_migardener_without_rows_is_uniform() {
        let lettuce = plant("lettuce", 8.0, None);
        assert_eq!(
            builtin().profile(&lettuce, PlanningMethod::MiGardener),
            SpacingProfile::Uniform { spacing_inches: 4.0 }
        );
        assert_eq!(builtin().footprint_cell_count(&lettuce, 12, PlanningMethod::MiGardener), 1);
    }

    #[test]
    fn test_migardener_zero_row_spacing_is_uniform() {
        let mut tables = SpacingTables::empty();
        tables.migardener.insert(
            "radish".into(),
            MiGardenerSpacing {
                row_spacing: Some(0.0),
                plant_spacing: 2.0,
            },
        );
        let rule = SpacingRule::new(tables);
        let radish = plant("radish", 2.0, Some(6.0));
        assert_eq!(
            rule.profile(&radish, PlanningMethod::MiGardener),
            SpacingProfile::Uniform { spacing_inches: 2.0 }
        );
    }

    #[test]
    fn test_migardener_falls_back_to_plant_record() {
        let okra = plant("okra", 12.0, Some(30.0));
        // 1 col × ceil(30/12)=3 rows
        assert_eq!(bare().footprint_cell_count(&okra, 12, PlanningMethod::MiGardener), 3);
    }

    #[test]
    fn test_intensive_applies_hex_factor() {
        // 18in on-center: 18² × 0.866 = 280.58 sq in / 144 = 1.95 → 2 cells
        let tomato = plant("tomato", 24.0, None);
        assert_eq!(builtin().footprint_cell_count(&tomato, 12, PlanningMethod::Intensive), 2);
        // Without override, 24in: 576 × 0.866 = 498.8 / 144 = 3.46 → 4 cells
        assert_eq!(bare().footprint_cell_count(&tomato, 12, PlanningMethod::Intensive), 4);
    }

    #[test]
    fn test_intensive_small_plant_is_one_cell() {
        let carrot = plant("carrot", 3.0, None);
        assert_eq!(builtin().footprint_cell_count(&carrot, 12, PlanningMethod::Intensive), 1);
    }

    #[test]
    fn test_zero_spacing_is_one_cell_for_every_method() {
        let odd = plant("odd", 0.0, None);
        for method in [
            PlanningMethod::SquareFoot,
            PlanningMethod::Row,
            PlanningMethod::MiGardener,
            PlanningMethod::Intensive,
            PlanningMethod::RaisedBed,
        ] {
            assert_eq!(
                bare().footprint_cell_count(&odd, 12, method),
                1,
                "{method:?} must reserve at least one cell"
            );
        }
    }

    #[test]
    fn test_unknown_plant_id_is_one_cell() {
        let catalog = InMemoryCatalog::builtin();
        let cells = builtin().footprint_cell_count_for_id(
            &catalog,
            "dragon-fruit",
            12,
            PlanningMethod::Row,
        );
        assert_eq!(cells, 1);
    }

    #[test]
    fn test_known_plant_id_resolves_through_catalog() {
        let catalog = InMemoryCatalog::builtin();
        // Catalog zucchini: 36in → 3×3 under the row method
        let cells =
            builtin().footprint_cell_count_for_id(&catalog, "zucchini", 12, PlanningMethod::Row);
        assert_eq!(cells, 9);
    }
}
