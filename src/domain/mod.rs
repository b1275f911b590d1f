pub mod board;
pub mod item;
pub mod reorder;

pub use board::{Board, Container};
pub use item::{DragKind, Item};
pub use reorder::array_move;
