//! Single-draggable drop zone placement
//!
//! State machine for the droppable tool: one draggable element lives in one
//! of several named zones (or at its origin outside all of them). Unlike the
//! board engine, placement here is committed on drag end rather than live.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placement state of one draggable across a set of drop zones
///
/// `parent` is the zone currently holding the draggable, `None` meaning its
/// original spot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropzoneState {
    parent: Option<String>,
    over: Option<String>,
    dragging: bool,
    origin: Option<String>,
}

impl DropzoneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn over(&self) -> Option<&str> {
        self.over.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Zone the draggable occupied when the current gesture started
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn drag_start(&mut self) {
        self.dragging = true;
        self.origin = self.parent.clone();
    }

    /// Tracks the hovered zone during the gesture; `None` clears it
    pub fn drag_move(&mut self, over: Option<&str>) {
        self.over = over.map(str::to_string);
    }

    /// Ends the gesture, committing placement only when a zone was resolved
    ///
    /// Dropping outside every zone keeps the previous parent.
    pub fn drag_end(&mut self, over: Option<&str>) {
        self.over = None;
        self.dragging = false;
        self.origin = None;

        if let Some(zone) = over {
            debug!(zone = %zone, "draggable placed in zone");
            self.parent = Some(zone.to_string());
        }
    }
}
