//! Grid geometry: converts between pixel rectangles and grid cells.
//!
//! Cell indices are inclusive. A rectangle's `right`/`bottom` edges are
//! exclusive pixel bounds, so a cell block `start..=end` covers pixels
//! `[start * size, (end + 1) * size)`. A grid is derived from one container
//! measurement and is rebuilt when the container resizes.

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::geometry::{CellInfo, ContainerSize, Coordinate, Rect};

/// Tolerance for pixel edges that land on a cell boundary after float scaling.
const EDGE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub cell_width: f64,
    pub cell_height: f64,
    pub total_width: f64,
    pub total_height: f64,
    pub num_horizontal_cells: u32,
    pub num_vertical_cells: u32,
}

impl Grid {
    pub fn new(
        total_width: f64,
        total_height: f64,
        num_horizontal_cells: u32,
        num_vertical_cells: u32,
    ) -> SchedulerResult<Self> {
        if num_horizontal_cells == 0 || num_vertical_cells == 0 {
            return Err(SchedulerError::InvalidGrid(format!(
                "cell counts must be positive ({}x{})",
                num_horizontal_cells, num_vertical_cells
            )));
        }

        if !(total_width.is_finite() && total_height.is_finite())
            || total_width <= 0.0
            || total_height <= 0.0
        {
            return Err(SchedulerError::InvalidGrid(format!(
                "container must have a positive size ({}x{})",
                total_width, total_height
            )));
        }

        Ok(Self {
            cell_width: total_width / num_horizontal_cells as f64,
            cell_height: total_height / num_vertical_cells as f64,
            total_width,
            total_height,
            num_horizontal_cells,
            num_vertical_cells,
        })
    }

    /// Build a grid for a measured container.
    pub fn for_container(
        size: ContainerSize,
        num_horizontal_cells: u32,
        num_vertical_cells: u32,
    ) -> SchedulerResult<Self> {
        let grid = Self::new(
            size.scroll_width,
            size.scroll_height,
            num_horizontal_cells,
            num_vertical_cells,
        )?;
        log::debug!(
            "Grid rebuilt for {}x{} container: cell {:.2}x{:.2}",
            size.scroll_width,
            size.scroll_height,
            grid.cell_width,
            grid.cell_height
        );
        Ok(grid)
    }

    pub fn size(&self) -> ContainerSize {
        ContainerSize::new(self.total_width, self.total_height)
    }

    /// Cells covered by `rect`; out-of-range pixels are clamped onto the grid.
    pub fn cell_from_rect(&self, rect: &Rect) -> CellInfo {
        let start_x = first_index(rect.left, self.cell_width, self.num_horizontal_cells);
        let end_x = last_index(rect.right, self.cell_width, self.num_horizontal_cells).max(start_x);
        let start_y = first_index(rect.top, self.cell_height, self.num_vertical_cells);
        let end_y = last_index(rect.bottom, self.cell_height, self.num_vertical_cells).max(start_y);

        CellInfo::new(rect.id, start_x, start_y, end_x, end_y)
    }

    /// Pixel rectangle covering `cell`.
    pub fn rect_from_cell(&self, cell: &CellInfo) -> Rect {
        let left = cell.start_x as f64 * self.cell_width;
        let right = (cell.end_x + 1) as f64 * self.cell_width;
        let top = cell.start_y as f64 * self.cell_height;
        let bottom = (cell.end_y + 1) as f64 * self.cell_height;

        Rect::from_corners(
            cell.id,
            Coordinate::new(left, top),
            Coordinate::new(right, bottom),
        )
    }
}

fn first_index(edge: f64, size: f64, count: u32) -> u32 {
    clamp_index(((edge / size) + EDGE_EPSILON).floor(), count)
}

fn last_index(edge: f64, size: f64, count: u32) -> u32 {
    clamp_index(((edge / size) - EDGE_EPSILON).ceil() - 1.0, count)
}

fn clamp_index(raw: f64, count: u32) -> u32 {
    if raw.is_nan() || raw <= 0.0 {
        0
    } else {
        (raw as u32).min(count - 1)
    }
}
