//! Grid-snapped free dragging with boundary clamping
//!
//! Pure position math for the free-drag tool: a single element is dragged by
//! pixel deltas, kept inside a bounding area, and aligned to the nearest
//! grid line on release.

use crate::error::{BoardError, Result};
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// State of a grid-snapped draggable element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDrag {
    position: Point,
    grid_size: f64,
    bounds: Rect,
    /// Width and height of the dragged element
    size: (f64, f64),
}

impl GridDrag {
    pub fn new(position: Point, grid_size: f64, bounds: Rect, size: (f64, f64)) -> Result<Self> {
        if grid_size <= 0.0 {
            return Err(BoardError::InvalidGridSize(grid_size));
        }
        Ok(Self {
            position,
            grid_size,
            bounds,
            size,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Position that committing `delta` would produce: clamp the raw position
    /// into bounds, snap each axis to the nearest grid line, clamp again so
    /// snapping cannot push the element back out
    pub fn resolve_delta(&self, delta: Point) -> Point {
        let raw = Point::new(self.position.x + delta.x, self.position.y + delta.y);
        let bounded = self.clamp(raw);
        let snapped = Point::new(self.snap_axis(bounded.x, self.bounds.x), self.snap_axis(bounded.y, self.bounds.y));
        self.clamp(snapped)
    }

    /// Commits a drag delta, e.g. on drag end
    pub fn apply_delta(&mut self, delta: Point) {
        let next = self.resolve_delta(delta);
        if next != self.position {
            debug!(x = next.x, y = next.y, "grid position committed");
            self.position = next;
        }
    }

    /// Changes the grid size and re-aligns the current position to it
    pub fn set_grid_size(&mut self, grid_size: f64) -> Result<()> {
        if grid_size <= 0.0 {
            return Err(BoardError::InvalidGridSize(grid_size));
        }
        self.grid_size = grid_size;
        self.position = self.clamp(Point::new(
            self.snap_axis(self.position.x, self.bounds.x),
            self.snap_axis(self.position.y, self.bounds.y),
        ));
        Ok(())
    }

    // Grid lines are anchored at the bounds origin.
    fn snap_axis(&self, value: f64, origin: f64) -> f64 {
        origin + ((value - origin) / self.grid_size).round() * self.grid_size
    }

    fn clamp(&self, point: Point) -> Point {
        let max_x = self.bounds.x + (self.bounds.width - self.size.0).max(0.0);
        let max_y = self.bounds.y + (self.bounds.height - self.size.1).max(0.0);
        Point::new(
            point.x.clamp(self.bounds.x, max_x),
            point.y.clamp(self.bounds.y, max_y),
        )
    }
}
