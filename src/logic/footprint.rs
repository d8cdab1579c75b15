use crate::logic::spacing::{cells_per_side, SpacingProfile};
use crate::models::bed::{GardenBed, PlanningMethod};
use crate::models::cell::FootprintSize;
use crate::models::GridCell;

/// Bounding block one planting reserves.
///
/// MIGardener row crops get the elongated rectangle their row and in-row
/// spacings describe. Every other case reserves the smallest square holding
/// `cell_count` cells, which over-reserves when the count is not a perfect
/// square; hexagonal packing is approximated the same way.
pub fn footprint_size(
    cell_count: u32,
    method: PlanningMethod,
    grid_size: u32,
    profile: Option<SpacingProfile>,
) -> FootprintSize {
    match (method, profile) {
        (PlanningMethod::MiGardener, Some(row_based @ SpacingProfile::RowBased { .. })) => {
            row_based.footprint(grid_size)
        }
        _ => FootprintSize::square(cells_per_side(cell_count)),
    }
}

/// Cells covered by one planting anchored at its top-left cell, sorted by
/// `(x, y)`. Not clipped to any bed; see [`cells_within`].
pub fn cells_for(
    anchor: GridCell,
    cell_count: u32,
    method: PlanningMethod,
    grid_size: u32,
    profile: Option<SpacingProfile>,
) -> Vec<GridCell> {
    block(anchor, footprint_size(cell_count, method, grid_size, profile))
}

/// The part of one planting's block that lies on `bed`'s grid, sorted by
/// `(x, y)`. Only in-bounds cells are ever generated, so the work is capped
/// by the grid size whatever `cell_count` says.
pub fn cells_within(
    anchor: GridCell,
    cell_count: u32,
    bed: &GardenBed,
    profile: Option<SpacingProfile>,
) -> Vec<GridCell> {
    let size = footprint_size(cell_count, bed.planning_method, bed.grid_size, profile);
    block_within(anchor, size, bed.grid_width(), bed.grid_height())
}

/// All cells of a `size` block with top-left corner at `anchor`, sorted by
/// `(x, y)`. Cells past `u32::MAX` on either axis are left out.
pub fn block(anchor: GridCell, size: FootprintSize) -> Vec<GridCell> {
    const AXIS_END: u64 = u32::MAX as u64 + 1;
    cells_in(anchor, size, AXIS_END, AXIS_END)
}

/// [`block`] intersected with a `width × height` grid.
pub fn block_within(anchor: GridCell, size: FootprintSize, width: u32, height: u32) -> Vec<GridCell> {
    cells_in(anchor, size, u64::from(width), u64::from(height))
}

fn cells_in(anchor: GridCell, size: FootprintSize, x_limit: u64, y_limit: u64) -> Vec<GridCell> {
    let x_end = (u64::from(anchor.x) + u64::from(size.cols)).min(x_limit);
    let y_end = (u64::from(anchor.y) + u64::from(size.rows)).min(y_limit);
    let (x_start, y_start) = (u64::from(anchor.x), u64::from(anchor.y));
    if x_start >= x_end || y_start >= y_end {
        return Vec::new();
    }
    let mut cells = Vec::new();
    for x in x_start..x_end {
        // Both ends are at most 2^32, so every coordinate fits in u32.
        cells.extend((y_start..y_end).map(|y| GridCell::new(x as u32, y as u32)));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> GridCell {
        GridCell::new(0, 0)
    }

    #[test]
    fn test_single_cell() {
        let cells = cells_for(GridCell::new(3, 2), 1, PlanningMethod::SquareFoot, 12, None);
        assert_eq!(cells, vec![GridCell::new(3, 2)]);
    }

    #[test]
    fn test_perfect_square_block() {
        let cells = cells_for(GridCell::new(1, 1), 4, PlanningMethod::Row, 12, None);
        assert_eq!(
            cells,
            vec![
                GridCell::new(1, 1),
                GridCell::new(1, 2),
                GridCell::new(2, 1),
                GridCell::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_non_square_count_reserves_bounding_square() {
        // 5 cells → 3×3 block
        let cells = cells_for(origin(), 5, PlanningMethod::SquareFoot, 12, None);
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&GridCell::new(2, 2)));
    }

    #[test]
    fn test_zero_count_is_one_cell() {
        assert_eq!(cells_for(origin(), 0, PlanningMethod::Row, 12, None).len(), 1);
    }

    #[test]
    fn test_migardener_row_crop_is_a_rectangle() {
        let profile = SpacingProfile::RowBased {
            row_inches: 36.0,
            plant_inches: 24.0,
        };
        let cells = cells_for(origin(), 6, PlanningMethod::MiGardener, 12, Some(profile));
        // 2 columns × 3 rows
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|c| c.x < 2 && c.y < 3));
    }

    #[test]
    fn test_row_profile_ignored_outside_migardener() {
        let profile = SpacingProfile::RowBased {
            row_inches: 36.0,
            plant_inches: 24.0,
        };
        let cells = cells_for(origin(), 4, PlanningMethod::Row, 12, Some(profile));
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| c.x < 2 && c.y < 2));
    }

    #[test]
    fn test_intensive_uses_bounding_square() {
        let profile = SpacingProfile::Uniform { spacing_inches: 18.0 };
        let cells = cells_for(origin(), 2, PlanningMethod::Intensive, 12, Some(profile));
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn test_cells_are_sorted_and_unique() {
        let cells = cells_for(GridCell::new(4, 7), 9, PlanningMethod::SquareFoot, 12, None);
        let mut sorted = cells.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(cells, sorted);
    }

    #[test]
    fn test_huge_count_is_clipped_to_the_bed() {
        let bed = GardenBed {
            id: "bed-1".into(),
            width: 4.0,
            length: 4.0,
            grid_size: 12,
            planning_method: PlanningMethod::SquareFoot,
        };
        for count in [u32::MAX, 10_000_000] {
            let cells = cells_within(GridCell::new(1, 2), count, &bed, None);
            assert_eq!(cells.len(), 6, "3 columns × 2 rows remain inside a 4×4 grid");
            assert!(cells.iter().all(|c| bed.contains(c.x, c.y)));
        }
        assert!(cells_within(GridCell::new(4, 0), u32::MAX, &bed, None).is_empty());
    }

    #[test]
    fn test_block_within_matches_block_inside_the_grid() {
        let size = FootprintSize { cols: 2, rows: 3 };
        assert_eq!(block_within(GridCell::new(1, 1), size, 10, 10), block(GridCell::new(1, 1), size));
        assert_eq!(
            block_within(GridCell::new(1, 1), size, 2, 3),
            vec![GridCell::new(1, 1), GridCell::new(1, 2)]
        );
    }

    #[test]
    fn test_block_stops_at_axis_limit() {
        let cells = block(GridCell::new(u32::MAX, 0), FootprintSize::square(2));
        assert_eq!(cells, vec![GridCell::new(u32::MAX, 0), GridCell::new(u32::MAX, 1)]);
    }
}
