//! Moving an existing cell block up and down the grid.

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::geometry::CellInfo;
use crate::services::grid::Grid;

/// Shift a cell block by whole rows; moves that would leave the grid are ignored.
pub fn nudge_cell(cell: &CellInfo, rows: i32, grid: &Grid) -> CellInfo {
    let start = cell.start_y as i64 + rows as i64;
    let end = cell.end_y as i64 + rows as i64;

    if start < 0 || end > grid.num_vertical_cells as i64 - 1 {
        return *cell;
    }

    cell.with_rows(start as u32, end as u32)
}

/// Move a cell block so its top edge sits at `top` pixels, snapped to a row.
///
/// The block must keep its row span; a move that would squash it against
/// the grid edge is rejected.
pub fn drag_cell_to(cell: &CellInfo, top: f64, grid: &Grid) -> SchedulerResult<CellInfo> {
    let rect = grid.rect_from_cell(cell);
    let max_top = (grid.total_height - rect.height).max(0.0);
    let snapped = ((top.clamp(0.0, max_top)) / grid.cell_height).round() * grid.cell_height;

    let moved = grid.cell_from_rect(&rect.with_top(snapped));
    let updated = cell.with_rows(moved.start_y, moved.end_y);

    if updated.span_y != cell.span_y {
        return Err(SchedulerError::SpanChanged {
            expected: cell.span_y,
            found: updated.span_y,
        });
    }

    Ok(updated)
}
