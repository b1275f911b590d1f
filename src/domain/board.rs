use crate::domain::item::{DragKind, Item};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered, named bucket of items (a kanban column)
///
/// Item order is significant: insertion position is display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub title: String,
    pub items: Vec<Item>,
}

impl Container {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Index of the item with the given id within this container
    pub fn item_index(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// The full collection of containers and their items
///
/// Root aggregate. Every item id appears in exactly one container's list;
/// container order is itself significant and reorderable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub containers: Vec<Container>,
}

impl Board {
    /// Creates a board, validating that ids are globally unique across
    /// containers and items
    pub fn new(containers: Vec<Container>) -> Result<Self> {
        let mut seen = HashSet::new();
        for container in &containers {
            if !seen.insert(container.id.as_str()) {
                return Err(BoardError::DuplicateId(container.id.clone()));
            }
            for item in &container.items {
                if !seen.insert(item.id.as_str()) {
                    return Err(BoardError::DuplicateId(item.id.clone()));
                }
            }
        }
        Ok(Self { containers })
    }

    pub fn empty() -> Self {
        Self {
            containers: Vec::new(),
        }
    }

    /// Resolves what kind of draggable entity an id names, if any
    pub fn kind_of(&self, id: &str) -> Option<DragKind> {
        if self.containers.iter().any(|c| c.id == id) {
            Some(DragKind::Container)
        } else if self.locate_item(id).is_some() {
            Some(DragKind::Item)
        } else {
            None
        }
    }

    /// Board-level index of the container with the given id
    pub fn container_index(&self, id: &str) -> Option<usize> {
        self.containers.iter().position(|c| c.id == id)
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Locates an item as (container index, item index)
    pub fn locate_item(&self, id: &str) -> Option<(usize, usize)> {
        self.containers
            .iter()
            .enumerate()
            .find_map(|(ci, container)| container.item_index(id).map(|ii| (ci, ii)))
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        let (ci, ii) = self.locate_item(id)?;
        Some(&self.containers[ci].items[ii])
    }

    /// All item ids across all containers, in board order
    pub fn item_ids(&self) -> Vec<&str> {
        self.containers
            .iter()
            .flat_map(|c| c.items.iter().map(|item| item.id.as_str()))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
