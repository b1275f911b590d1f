use serde::{Deserialize, Serialize};
use std::fmt;

/// A draggable card on the board
///
/// Identity is globally unique across the whole board and stable for the
/// item's lifetime: moving an item between containers never clones it or
/// assigns a new id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub tag: String,
}

impl Item {
    /// Creates a new item with the given id, label and tag
    pub fn new(id: impl Into<String>, label: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tag: tag.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

/// Kind discriminant carried by every draggable entity
///
/// The board resolves this once at drag start instead of inferring it from
/// the shape of the identifier, so item ids and container ids can share any
/// naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Item,
    Container,
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Container => write!(f, "container"),
        }
    }
}
