//! # Boardkit Core
//!
//! Core drag-and-drop reorder logic and domain models for kanban-style
//! boards.
//!
//! This crate provides the board data model, the reorder engine that turns
//! drag lifecycle events into board state transitions, and the pure
//! interaction strategies around it (collision resolution, grid snapping,
//! drop zones) without any dependency on a rendering layer or input source.
//! A host of any kind drives it with `drag_start` / `drag_over` / `drag_end`
//! and reads the board and session snapshots back.

pub mod collision;
pub mod domain;
pub mod dropzone;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;

// Re-export commonly used types
pub use collision::{BoardCollision, Candidate, ClosestCenter, ClosestCorners, CollisionStrategy, PointerWithin};
pub use domain::{array_move, Board, Container, DragKind, Item};
pub use dropzone::DropzoneState;
pub use engine::{DragHandle, DragSession, ReorderEngine};
pub use error::{BoardError, Result};
pub use geometry::{Point, Rect};
pub use grid::GridDrag;
