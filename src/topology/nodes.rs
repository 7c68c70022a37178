//! Node positions and named node sets.

use std::collections::{BTreeMap, BTreeSet};

use crate::geometry::vector::Vec3;
use crate::topology::id::NodeId;

/// Owned node coordinates plus mesh-file-defined named node groupings
/// (boundary tags, source regions, and the like).
///
/// Set names iterate in lexicographic order so derived data is
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct NodeStore {
    positions: Vec<Vec3>,
    sets: BTreeMap<String, BTreeSet<NodeId>>,
}

impl NodeStore {
    pub fn new(positions: Vec<Vec3>) -> Self {
        NodeStore {
            positions,
            sets: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, node: NodeId) -> Vec3 {
        self.positions[node.get()]
    }

    /// Registers (or replaces) a named node set.
    pub fn insert_set(&mut self, name: impl Into<String>, nodes: impl IntoIterator<Item = NodeId>) {
        self.sets.insert(name.into(), nodes.into_iter().collect());
    }

    pub fn node_set(&self, name: &str) -> Option<&BTreeSet<NodeId>> {
        self.sets.get(name)
    }

    /// All named node sets, ordered by name.
    pub fn sets(&self) -> impl Iterator<Item = (&str, &BTreeSet<NodeId>)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }
}
