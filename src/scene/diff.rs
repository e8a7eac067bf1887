//! Diff tracking between evaluations.
//!
//! The host keeps eight persistent box objects and updates them in place
//! rather than rebuilding the scene, so the engine reports per-index
//! added/updated/removed sets against the previously exported state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::decomposition::Layout;
use super::mesh::{self, Mesh};
use super::palette::{BOX_MATERIALS, Material};

/// Everything the host needs to create or update one box object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxInstance {
    pub color_index: usize,
    pub mesh: Mesh,
    pub material: Material,
    pub center: [f64; 3],
}

impl BoxInstance {
    fn from_layout(layout: &Layout, index: usize) -> Self {
        let spec = &layout.boxes[index];
        Self {
            color_index: spec.color_index,
            mesh: mesh::box_mesh(spec),
            material: BOX_MATERIALS[spec.color_index],
            center: spec.center,
        }
    }
}

/// Changes since the previous export, keyed by `color_index`.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SceneDiff {
    pub added: Vec<BoxInstance>,
    pub updated: Vec<BoxInstance>,
    pub removed: Vec<usize>,
}

impl SceneDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Remembers the last exported instances and produces diffs against them.
#[derive(Debug, Default, Clone)]
pub struct DiffTracker {
    known: BTreeMap<usize, BoxInstance>,
}

impl DiffTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff a freshly computed layout against the last export. The first
    /// call adds all eight instances; later calls update only instances
    /// whose geometry actually changed.
    pub fn diff(&mut self, layout: &Layout) -> SceneDiff {
        let mut diff = SceneDiff::default();
        let mut next = BTreeMap::new();

        for index in 0..layout.boxes.len() {
            let instance = BoxInstance::from_layout(layout, index);
            match self.known.get(&index) {
                Some(existing) if *existing == instance => {}
                Some(_) => diff.updated.push(instance.clone()),
                None => diff.added.push(instance.clone()),
            }
            next.insert(index, instance);
        }

        for index in self.known.keys() {
            if !next.contains_key(index) {
                diff.removed.push(*index);
            }
        }

        self.known = next;
        diff
    }

    /// Forget all exported state and report which indices the host should
    /// drop. Used by the dispose path.
    pub fn clear(&mut self) -> Vec<usize> {
        let removed = self.known.keys().copied().collect();
        self.known.clear();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::DiffTracker;
    use crate::decomposition::compute_layout;

    #[test]
    fn first_diff_adds_all_eight_boxes() {
        let layout = compute_layout(5, 1).expect("valid parameters");
        let mut tracker = DiffTracker::new();

        let diff = tracker.diff(&layout);
        assert_eq!(diff.added.len(), 8);
        assert!(diff.updated.is_empty());
        assert!(diff.removed.is_empty());

        let indices: Vec<usize> = diff.added.iter().map(|i| i.color_index).collect();
        assert_eq!(indices, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn unchanged_layout_diffs_empty() {
        let layout = compute_layout(3, 3).expect("valid parameters");
        let mut tracker = DiffTracker::new();

        tracker.diff(&layout);
        assert!(tracker.diff(&layout).is_empty());
    }

    #[test]
    fn parameter_change_updates_in_place() {
        let mut tracker = DiffTracker::new();
        tracker.diff(&compute_layout(5, 1).expect("valid parameters"));

        let diff = tracker.diff(&compute_layout(5, 2).expect("valid parameters"));
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        // Changing b leaves only the a-cube (row 0) untouched.
        assert_eq!(diff.updated.len(), 7);
        assert!(diff.updated.iter().all(|instance| instance.color_index != 0));
    }

    #[test]
    fn changing_a_updates_every_box() {
        let mut tracker = DiffTracker::new();
        tracker.diff(&compute_layout(5, 1).expect("valid parameters"));

        let diff = tracker.diff(&compute_layout(6, 1).expect("valid parameters"));
        assert_eq!(diff.updated.len(), 8);
    }

    #[test]
    fn clear_reports_known_indices_once() {
        let mut tracker = DiffTracker::new();
        tracker.diff(&compute_layout(2, 2).expect("valid parameters"));

        assert_eq!(tracker.clear(), (0..8).collect::<Vec<_>>());
        assert!(tracker.clear().is_empty());
    }
}
