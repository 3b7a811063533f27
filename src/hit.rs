//! R-tree based hit testing for pointer targets.
//!
//! Hosts resolve raw pointer positions into the target arguments the
//! engines consume (item under the pointer, block under a drop). The
//! R-tree keeps point queries at O(log n); ties are broken by z-order,
//! with later insertions in front.

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A hit-testable entry: an id with its screen-space bounding box.
#[derive(Debug, Clone)]
pub struct HitEntry {
    pub id: String,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    /// Insertion order; higher values render in front.
    z: u64,
}

impl HitEntry {
    fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for HitEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for HitEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Hit-testing index over id-keyed bounding boxes.
#[derive(Default)]
pub struct HitMap {
    tree: RTree<HitEntry>,
    entries: HashMap<String, HitEntry>,
    next_z: u64,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update an entry. Re-inserting moves the entry to the
    /// front of the z-order, matching a host that raises re-rendered
    /// elements.
    pub fn insert(&mut self, id: impl Into<String>, min: (f64, f64), size: (f64, f64)) {
        let id = id.into();
        if let Some(old) = self.entries.remove(&id) {
            self.tree.remove(&old);
        }
        let entry = HitEntry {
            id: id.clone(),
            min_x: min.0,
            min_y: min.1,
            max_x: min.0 + size.0,
            max_y: min.1 + size.1,
            z: self.next_z,
        };
        self.next_z += 1;
        self.tree.insert(entry.clone());
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: &str) -> bool {
        if let Some(entry) = self.entries.remove(id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries containing the point, unordered.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<&str> {
        let envelope = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|e| e.contains_point(x, y))
            .map(|e| e.id.as_str())
            .collect()
    }

    /// The front-most entry containing the point.
    pub fn topmost_at(&self, x: f64, y: f64) -> Option<&str> {
        let envelope = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|e| e.contains_point(x, y))
            .max_by_key(|e| e.z)
            .map(|e| e.id.as_str())
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
