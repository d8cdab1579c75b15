use std::collections::{BTreeSet, HashSet};

use log::trace;

use crate::logic::footprint::block;
use crate::logic::spacing::cells_per_side;
use crate::models::{
    bed::GardenBed,
    cell::{AvailableCell, BedUsage, FootprintSize, OccupiedCell},
    GridCell,
};

/// Grid cells of `bed` not present in `occupied`, sorted by `(x, y)`.
pub fn available_cells(bed: &GardenBed, occupied: &[OccupiedCell]) -> Vec<AvailableCell> {
    if bed.is_degenerate() {
        return Vec::new();
    }
    let taken: HashSet<GridCell> = occupied.iter().map(OccupiedCell::cell).collect();
    let (width, height) = (bed.grid_width(), bed.grid_height());

    let mut free = Vec::with_capacity(bed.total_cells().saturating_sub(taken.len()));
    for x in 0..width {
        for y in 0..height {
            if !taken.contains(&GridCell::new(x, y)) {
                free.push(AvailableCell { x, y });
            }
        }
    }
    free
}

/// Free cells that can be part of a square block big enough for
/// `space_required` cells.
///
/// With a requirement of one cell (or zero) every free cell qualifies and
/// `available` comes back unchanged. Otherwise each free cell is tried as
/// the top-left corner of a `side × side` block; the union of all fully
/// free blocks is returned, deduplicated and sorted. This enumerates
/// candidate sites; it does not pick an optimal packing.
pub fn find_contiguous_spaces(available: &[AvailableCell], space_required: u32) -> Vec<AvailableCell> {
    if space_required <= 1 {
        return available.to_vec();
    }
    let side = cells_per_side(space_required);
    cells_of_blocks(available, FootprintSize::square(side))
}

/// Top-left corners at which a `size` block lies entirely on free cells,
/// sorted by `(x, y)`.
pub fn candidate_anchors(available: &[AvailableCell], size: FootprintSize) -> Vec<GridCell> {
    let free: HashSet<GridCell> = available.iter().map(AvailableCell::cell).collect();
    if !could_fit(&free, size) {
        trace!(
            "A {}x{} block cannot fit in {} free cells",
            size.cols,
            size.rows,
            free.len()
        );
        return Vec::new();
    }
    let mut anchors: Vec<GridCell> = free
        .iter()
        .copied()
        .filter(|anchor| block_is_free(&free, *anchor, size))
        .collect();
    anchors.sort();
    anchors
}

/// Union of the cells covered by every fully free `size` block.
pub fn cells_of_blocks(available: &[AvailableCell], size: FootprintSize) -> Vec<AvailableCell> {
    let anchors = candidate_anchors(available, size);
    let cells = covered_cells(&anchors, size);
    trace!(
        "{} anchors for a {}x{} block cover {} free cells",
        anchors.len(),
        size.cols,
        size.rows,
        cells.len()
    );
    cells
}

/// Sorted, deduplicated cells covered by `size` blocks at `anchors`.
pub fn covered_cells(anchors: &[GridCell], size: FootprintSize) -> Vec<AvailableCell> {
    let cells: BTreeSet<AvailableCell> = anchors
        .iter()
        .flat_map(|anchor| block(*anchor, size))
        .map(AvailableCell::from)
        .collect();
    cells.into_iter().collect()
}

/// True when the `size` block at `anchor` fits entirely on free cells.
pub fn fits_at(available: &[AvailableCell], anchor: GridCell, size: FootprintSize) -> bool {
    let free: HashSet<GridCell> = available.iter().map(AvailableCell::cell).collect();
    block_is_free(&free, anchor, size)
}

/// Cheap rejection before any anchor is tried: a block needs at least as
/// many free cells as it covers, and must be no wider or taller than the
/// span of the free cells.
fn could_fit(free: &HashSet<GridCell>, size: FootprintSize) -> bool {
    if (size.cell_count() as usize) > free.len() {
        return false;
    }
    let (Some(min_x), Some(max_x)) = (free.iter().map(|c| c.x).min(), free.iter().map(|c| c.x).max())
    else {
        return false;
    };
    let (Some(min_y), Some(max_y)) = (free.iter().map(|c| c.y).min(), free.iter().map(|c| c.y).max())
    else {
        return false;
    };
    u64::from(size.cols) <= u64::from(max_x - min_x) + 1 && u64::from(size.rows) <= u64::from(max_y - min_y) + 1
}

/// Checks cells one by one and stops at the first missing one, so no block
/// is ever materialized. A block running past `u32::MAX` is never free.
fn block_is_free(free: &HashSet<GridCell>, anchor: GridCell, size: FootprintSize) -> bool {
    const AXIS_END: u64 = u32::MAX as u64 + 1;
    let (x0, y0) = (u64::from(anchor.x), u64::from(anchor.y));
    let (x_end, y_end) = (x0 + u64::from(size.cols), y0 + u64::from(size.rows));
    if x_end > AXIS_END || y_end > AXIS_END {
        return false;
    }
    (x0..x_end).all(|x| (y0..y_end).all(|y| free.contains(&GridCell::new(x as u32, y as u32))))
}

/// Occupied and free cell counts for `bed`, counting each occupied position
/// once however many plantings claim it.
pub fn bed_usage(bed: &GardenBed, occupied: &[OccupiedCell]) -> BedUsage {
    let total_cells = bed.total_cells();
    if total_cells == 0 {
        return BedUsage {
            total_cells: 0,
            occupied_cells: 0,
            available_cells: 0,
            utilization: 0.0,
        };
    }
    let taken: HashSet<GridCell> = occupied
        .iter()
        .map(OccupiedCell::cell)
        .filter(|c| bed.contains(c.x, c.y))
        .collect();
    let occupied_cells = taken.len();
    BedUsage {
        total_cells,
        occupied_cells,
        available_cells: total_cells - occupied_cells,
        utilization: occupied_cells as f64 / total_cells as f64,
    }
}
