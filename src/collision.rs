//! Over-target resolution strategies for the drag-sensing layer
//!
//! The reorder engine expects exactly one `over_id` per event; these
//! strategies reduce the set of droppable rectangles a dragged element
//! overlaps to that single id. They are a capability of the sensing
//! collaborator, kept separate from the engine so an alternate strategy can
//! be swapped in without touching reorder logic.

use crate::domain::DragKind;
use crate::geometry::Rect;

/// A droppable target offered to a collision strategy
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub kind: DragKind,
    pub rect: Rect,
}

impl Candidate {
    pub fn new(id: impl Into<String>, kind: DragKind, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            rect,
        }
    }
}

/// Picks the single hovered target for the current drag position
///
/// Exact ties resolve to the earliest candidate in the supplied order, so
/// resolution is deterministic for a given input.
pub trait CollisionStrategy {
    fn resolve_over(&self, active: &Rect, candidates: &[Candidate]) -> Option<String>;
}

/// Candidate whose geometric center is closest to the active rect's center
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestCenter;

impl CollisionStrategy for ClosestCenter {
    fn resolve_over(&self, active: &Rect, candidates: &[Candidate]) -> Option<String> {
        let center = active.center();
        let mut best: Option<(&Candidate, f64)> = None;
        for candidate in candidates {
            let distance = center.distance_to(&candidate.rect.center());
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((candidate, distance));
            }
        }
        best.map(|(candidate, _)| candidate.id.clone())
    }
}

/// First candidate whose rect contains the active rect's center point
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerWithin;

impl CollisionStrategy for PointerWithin {
    fn resolve_over(&self, active: &Rect, candidates: &[Candidate]) -> Option<String> {
        let center = active.center();
        candidates
            .iter()
            .find(|candidate| candidate.rect.contains(&center))
            .map(|candidate| candidate.id.clone())
    }
}

/// Minimal summed corner-to-corner distance, tie-broken by vertical center
/// distance
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestCorners;

impl ClosestCorners {
    fn corner_distance(a: &Rect, b: &Rect) -> f64 {
        a.corners()
            .iter()
            .zip(b.corners().iter())
            .map(|(ca, cb)| ca.distance_to(cb))
            .sum()
    }
}

impl CollisionStrategy for ClosestCorners {
    fn resolve_over(&self, active: &Rect, candidates: &[Candidate]) -> Option<String> {
        let active_center_y = active.center().y;
        let mut best: Option<(&Candidate, f64, f64)> = None;
        for candidate in candidates {
            let corners = Self::corner_distance(active, &candidate.rect);
            let vertical = (active_center_y - candidate.rect.center().y).abs();
            let closer = match best {
                None => true,
                Some((_, best_corners, best_vertical)) => {
                    corners < best_corners
                        || (corners == best_corners && vertical < best_vertical)
                }
            };
            if closer {
                best = Some((candidate, corners, vertical));
            }
        }
        best.map(|(candidate, _, _)| candidate.id.clone())
    }
}

/// Kind-aware composite used for board drags
///
/// For a container drag, candidates are restricted to other containers and
/// point containment is tried before falling back to center distance. Item
/// drags use plain closest-center over all candidates.
#[derive(Debug, Clone, Copy)]
pub struct BoardCollision {
    active_kind: DragKind,
}

impl BoardCollision {
    pub fn for_kind(active_kind: DragKind) -> Self {
        Self { active_kind }
    }
}

impl CollisionStrategy for BoardCollision {
    fn resolve_over(&self, active: &Rect, candidates: &[Candidate]) -> Option<String> {
        match self.active_kind {
            DragKind::Container => {
                let containers: Vec<Candidate> = candidates
                    .iter()
                    .filter(|candidate| candidate.kind == DragKind::Container)
                    .cloned()
                    .collect();
                PointerWithin
                    .resolve_over(active, &containers)
                    .or_else(|| ClosestCenter.resolve_over(active, &containers))
            }
            DragKind::Item => ClosestCenter.resolve_over(active, candidates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, x: f64, y: f64) -> Candidate {
        Candidate::new(id, DragKind::Item, Rect::new(x, y, 100.0, 40.0))
    }

    fn container(id: &str, x: f64, y: f64) -> Candidate {
        Candidate::new(id, DragKind::Container, Rect::new(x, y, 200.0, 400.0))
    }

    #[test]
    fn test_closest_center_picks_nearest() {
        let candidates = vec![item("far", 0.0, 300.0), item("near", 0.0, 60.0)];
        let active = Rect::new(0.0, 50.0, 100.0, 40.0);

        let over = ClosestCenter.resolve_over(&active, &candidates);
        assert_eq!(over.as_deref(), Some("near"));
    }

    #[test]
    fn test_closest_center_tie_resolves_to_first() {
        let candidates = vec![item("above", 0.0, 0.0), item("below", 0.0, 100.0)];
        // Centered exactly between the two.
        let active = Rect::new(0.0, 50.0, 100.0, 40.0);

        let over = ClosestCenter.resolve_over(&active, &candidates);
        assert_eq!(over.as_deref(), Some("above"));
    }

    #[test]
    fn test_closest_center_empty_candidates() {
        let active = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(ClosestCenter.resolve_over(&active, &[]), None);
    }

    #[test]
    fn test_pointer_within_requires_containment() {
        let candidates = vec![container("left", 0.0, 0.0), container("right", 300.0, 0.0)];
        let active = Rect::new(320.0, 100.0, 100.0, 40.0);

        let over = PointerWithin.resolve_over(&active, &candidates);
        assert_eq!(over.as_deref(), Some("right"));

        let outside = Rect::new(600.0, 100.0, 100.0, 40.0);
        assert_eq!(PointerWithin.resolve_over(&outside, &candidates), None);
    }

    #[test]
    fn test_closest_corners_prefers_overlap() {
        let candidates = vec![item("one", 0.0, 0.0), item("two", 0.0, 50.0)];
        let active = Rect::new(10.0, 45.0, 100.0, 40.0);

        let over = ClosestCorners.resolve_over(&active, &candidates);
        assert_eq!(over.as_deref(), Some("two"));
    }

    #[test]
    fn test_closest_corners_vertical_tie_break() {
        // Both candidates are offset from the active rect by a 3-4-5 style
        // vector of length 100, so the corner sums are exactly equal; the
        // vertically closer candidate wins.
        let active = Rect::new(100.0, 100.0, 100.0, 40.0);
        let candidates = vec![
            item("left", 40.0, 20.0),    // offset (-60, -80)
            item("right", 180.0, 160.0), // offset (80, 60)
        ];

        let left_sum = ClosestCorners::corner_distance(&active, &candidates[0].rect);
        let right_sum = ClosestCorners::corner_distance(&active, &candidates[1].rect);
        assert_eq!(left_sum, right_sum);

        let over = ClosestCorners.resolve_over(&active, &candidates);
        assert_eq!(over.as_deref(), Some("right"));
    }

    #[test]
    fn test_board_collision_container_drag_ignores_items() {
        let candidates = vec![
            item("card", 10.0, 10.0),
            container("col-a", 0.0, 0.0),
            container("col-b", 300.0, 0.0),
        ];
        // Active container sits right on top of the card, inside col-a.
        let active = Rect::new(10.0, 10.0, 200.0, 400.0);

        let over = BoardCollision::for_kind(DragKind::Container).resolve_over(&active, &candidates);
        assert_eq!(over.as_deref(), Some("col-a"));
    }

    #[test]
    fn test_board_collision_container_drag_falls_back_to_center() {
        let candidates = vec![container("col-a", 0.0, 0.0), container("col-b", 300.0, 0.0)];
        // Center is outside both containers but nearer col-b.
        let active = Rect::new(520.0, 500.0, 200.0, 400.0);

        let over = BoardCollision::for_kind(DragKind::Container).resolve_over(&active, &candidates);
        assert_eq!(over.as_deref(), Some("col-b"));
    }

    #[test]
    fn test_board_collision_item_drag_uses_closest_center() {
        let candidates = vec![
            container("col-a", 0.0, 0.0),
            item("near", 10.0, 60.0),
            item("far", 10.0, 300.0),
        ];
        let active = Rect::new(10.0, 55.0, 100.0, 40.0);

        let over = BoardCollision::for_kind(DragKind::Item).resolve_over(&active, &candidates);
        assert_eq!(over.as_deref(), Some("near"));
    }
}
