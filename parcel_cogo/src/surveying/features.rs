//! Point features referenced by observations.
//!
//! Observations never hold positions directly. They carry [`FeatureId`]
//! handles and look coordinates up through a [`PointLookup`] each time they
//! are resolved, so an edit session can move, roll back or delete points
//! independently of the observations that mention them.

use serde::{Deserialize, Serialize};

use crate::geometry::{Position, Window};

/// Opaque handle to a point feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(pub u32);

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source of point coordinates. A handle with no position is undefined.
pub trait PointLookup {
    fn position(&self, id: FeatureId) -> Option<Position>;
}

impl<T: PointLookup + ?Sized> PointLookup for &T {
    fn position(&self, id: FeatureId) -> Option<Position> {
        (**self).position(id)
    }
}

/// A named survey point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointFeature {
    pub name: String,
    pub position: Position,
}

impl PointFeature {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Simple in-memory arena of point features.
///
/// Handles are never reused, so removing a point leaves any observation
/// that still refers to it pointing at an undefined feature.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<Option<PointFeature>>,
}

impl PointStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Adds a point and returns its handle.
    pub fn add_point(&mut self, name: impl Into<String>, position: Position) -> FeatureId {
        self.points.push(Some(PointFeature::new(name, position)));
        FeatureId((self.points.len() - 1) as u32)
    }

    /// Moves an existing point.
    pub fn update_point(&mut self, id: FeatureId, position: Position) -> bool {
        match self.slot_mut(id) {
            Some(p) => {
                p.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes the point with the given handle.
    pub fn remove_point(&mut self, id: FeatureId) -> Option<PointFeature> {
        self.points.get_mut(id.0 as usize).and_then(Option::take)
    }

    pub fn get(&self, id: FeatureId) -> Option<&PointFeature> {
        self.points.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Finds the first live point with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<FeatureId> {
        self.iter().find(|(_, p)| p.name == name).map(|(id, _)| id)
    }

    /// Returns an iterator over all live points with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureId, &PointFeature)> {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_ref().map(|p| (FeatureId(i as u32), p)))
    }

    /// Number of live points.
    pub fn len(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounding box of every live point.
    pub fn extent(&self) -> Window {
        let mut w = Window::new();
        for (_, p) in self.iter() {
            w.union_position(&p.position);
        }
        w
    }

    /// Clears all points. Handles issued earlier become undefined.
    pub fn clear(&mut self) {
        for p in &mut self.points {
            *p = None;
        }
    }

    fn slot_mut(&mut self, id: FeatureId) -> Option<&mut PointFeature> {
        self.points.get_mut(id.0 as usize).and_then(Option::as_mut)
    }
}

impl PointLookup for PointStore {
    fn position(&self, id: FeatureId) -> Option<Position> {
        self.get(id).map(|p| p.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_find_and_update() {
        let mut store = PointStore::new();
        let a = store.add_point("A", Position::new(1.0, 2.0));
        let b = store.add_point("B", Position::new(3.0, 4.0));
        assert_ne!(a, b);
        assert_eq!(store.find_by_name("B"), Some(b));
        assert!(store.update_point(a, Position::new(5.0, 6.0)));
        let p = store.position(a).unwrap();
        assert_eq!((p.x, p.y), (5.0, 6.0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn removed_handles_stay_undefined() {
        let mut store = PointStore::new();
        let a = store.add_point("A", Position::new(1.0, 2.0));
        assert!(store.remove_point(a).is_some());
        assert!(store.position(a).is_none());
        assert!(!store.update_point(a, Position::new(0.0, 0.0)));
        let b = store.add_point("B", Position::new(0.0, 0.0));
        assert_ne!(a, b);
        assert!(store.position(a).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn extent_covers_live_points() {
        let mut store = PointStore::new();
        assert!(store.extent().is_empty());
        store.add_point("A", Position::new(0.0, 0.0));
        let b = store.add_point("B", Position::new(100.0, 100.0));
        store.add_point("C", Position::new(10.0, 5.0));
        store.remove_point(b);
        let w = store.extent();
        assert_eq!(w.width(), Some(10.0));
        assert_eq!(w.height(), Some(5.0));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn lookup_through_reference() {
        let mut store = PointStore::new();
        let a = store.add_point("A", Position::new(1.0, 1.0));
        let lookup: &dyn PointLookup = &store;
        assert!(lookup.position(a).is_some());
        assert!((&store).position(FeatureId(99)).is_none());
    }
}
