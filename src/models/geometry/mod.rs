// Geometry module
// Pixel rectangles, container sizes and discrete grid cells

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pixel position in a container's local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp into `[0, width] × [0, height]`.
    pub fn clamp_to(self, size: ContainerSize) -> Self {
        Self {
            x: self.x.clamp(0.0, size.scroll_width.max(0.0)),
            y: self.y.clamp(0.0, size.scroll_height.max(0.0)),
        }
    }
}

/// Scrollable extent of the grid container, refreshed on resize.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerSize {
    pub scroll_width: f64,
    pub scroll_height: f64,
}

impl ContainerSize {
    pub fn new(scroll_width: f64, scroll_height: f64) -> Self {
        Self {
            scroll_width,
            scroll_height,
        }
    }
}

/// A normalized pixel rectangle.
///
/// `start_x/start_y` is the anchor (press point or top-left of a cell span),
/// `end_x/end_y` the opposite corner as the pointer left it. The edges are
/// always ordered: `top <= bottom`, `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub id: Uuid,
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl Rect {
    /// Build a rectangle spanning two corners given in any order.
    pub fn from_corners(id: Uuid, start: Coordinate, end: Coordinate) -> Self {
        let top = start.y.min(end.y);
        let bottom = start.y.max(end.y);
        let left = start.x.min(end.x);
        let right = start.x.max(end.x);

        Self {
            id,
            top,
            left,
            bottom,
            right,
            width: right - left,
            height: bottom - top,
            start_x: start.x,
            start_y: start.y,
            end_x: end.x,
            end_y: end.y,
        }
    }

    /// Same size, top edge moved to `top`.
    pub fn with_top(self, top: f64) -> Self {
        let start = Coordinate::new(self.left, top);
        let end = Coordinate::new(self.right, top + self.height);
        Self::from_corners(self.id, start, end)
    }
}

/// A block of grid cells, addressed by inclusive column/row indices.
///
/// `span_x = end_x - start_x + 1` and `span_y = end_y - start_y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellInfo {
    pub id: Uuid,
    pub start_x: u32,
    pub start_y: u32,
    pub end_x: u32,
    pub end_y: u32,
    pub span_x: u32,
    pub span_y: u32,
}

impl CellInfo {
    /// Create a cell block; corners may be given in any order.
    pub fn new(id: Uuid, start_x: u32, start_y: u32, end_x: u32, end_y: u32) -> Self {
        let (start_x, end_x) = (start_x.min(end_x), start_x.max(end_x));
        let (start_y, end_y) = (start_y.min(end_y), start_y.max(end_y));
        Self {
            id,
            start_x,
            start_y,
            end_x,
            end_y,
            span_x: end_x - start_x + 1,
            span_y: end_y - start_y + 1,
        }
    }

    /// Same columns, rows replaced.
    pub fn with_rows(self, start_y: u32, end_y: u32) -> Self {
        Self::new(self.id, self.start_x, start_y, self.end_x, end_y)
    }
}
