use crate::domain::{array_move, Board, DragKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The active entity of an in-progress drag, with its kind resolved once at
/// drag start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragHandle {
    pub id: String,
    pub kind: DragKind,
}

/// Ephemeral state of one drag gesture
///
/// Created on drag start, updated on every over event, cleared on drag end.
/// At most one session is open at a time; the sensing layer serializes
/// gestures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub active: Option<DragHandle>,
    pub over_id: Option<String>,
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|handle| handle.id.as_str())
    }
}

/// Converts a stream of drag lifecycle events into board state transitions
///
/// The engine owns the board and the drag session exclusively. All handlers
/// are synchronous and total: ids that do not name anything on the board are
/// no-ops, never errors. Positions are committed live on every over event,
/// so `drag_end` only closes the session — a drop outside any target keeps
/// the last committed order.
#[derive(Debug, Clone)]
pub struct ReorderEngine {
    board: Board,
    session: DragSession,
}

impl ReorderEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            session: DragSession::default(),
        }
    }

    /// Read-only board snapshot for the rendering collaborator
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only session snapshot for hover/active styling
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Opens a drag session on the given entity
    ///
    /// A no-op when the id names neither an item nor a container. Never
    /// mutates the board.
    pub fn drag_start(&mut self, active_id: &str) {
        let Some(kind) = self.board.kind_of(active_id) else {
            trace!(active = %active_id, "drag start on unknown id ignored");
            return;
        };
        trace!(active = %active_id, %kind, "drag session opened");
        self.session = DragSession {
            active: Some(DragHandle {
                id: active_id.to_string(),
                kind,
            }),
            over_id: None,
        };
    }

    /// Commits the reorder implied by the currently hovered target
    ///
    /// Called on every hover-target change during the drag. Re-invoking with
    /// the hover target unchanged is a no-op, so a move to a position the
    /// entity already occupies never thrashes the order.
    pub fn drag_over(&mut self, over_id: Option<&str>) {
        let Some(active) = self.session.active.clone() else {
            return;
        };
        if self.session.over_id.as_deref() == over_id {
            return;
        }
        self.session.over_id = over_id.map(str::to_string);

        let Some(over_id) = over_id else {
            return;
        };

        match active.kind {
            DragKind::Container => self.move_container(&active.id, over_id),
            DragKind::Item => self.move_item(&active.id, over_id),
        }
    }

    /// Closes the drag session
    ///
    /// The board stays exactly as last committed by `drag_over`; an
    /// unresolved drop does not roll back.
    pub fn drag_end(&mut self) {
        if self.session.is_active() {
            trace!(active = ?self.session.active_id(), "drag session closed");
        }
        self.session = DragSession::default();
    }

    fn move_container(&mut self, active_id: &str, over_id: &str) {
        // A container drag only reorders when hovering another container;
        // items are not valid targets for it.
        let Some(over_index) = self.board.container_index(over_id) else {
            return;
        };
        let Some(active_index) = self.board.container_index(active_id) else {
            return;
        };
        if active_index == over_index {
            return;
        }
        debug!(active = %active_id, over = %over_id, from = active_index, to = over_index, "container reordered");
        array_move(&mut self.board.containers, active_index, over_index);
    }

    fn move_item(&mut self, active_id: &str, over_id: &str) {
        let Some((source, item_index)) = self.board.locate_item(active_id) else {
            return;
        };

        if let Some((target, over_index)) = self.board.locate_item(over_id) {
            if source == target {
                if item_index != over_index {
                    debug!(active = %active_id, over = %over_id, "item reordered in container");
                    array_move(&mut self.board.containers[source].items, item_index, over_index);
                }
            } else {
                debug!(active = %active_id, over = %over_id, "item moved across containers");
                let item = self.board.containers[source].items.remove(item_index);
                self.board.containers[target].items.insert(over_index, item);
            }
        } else if let Some(target) = self.board.container_index(over_id) {
            // Hovering a container's empty space appends to that container.
            // Inside the source container this is already the item's home, so
            // nothing moves.
            if source != target {
                debug!(active = %active_id, over = %over_id, "item moved to end of container");
                let item = self.board.containers[source].items.remove(item_index);
                self.board.containers[target].items.push(item);
            }
        }
    }
}
