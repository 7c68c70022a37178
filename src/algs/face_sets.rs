//! Projection of named node sets onto faces.
//!
//! Mesh files tag groups of nodes (boundary patches, wells, source
//! regions); downstream kernels want the same groupings on faces. A face
//! joins a projected set when its entire node list is contained in the node
//! set.

use hashbrown::HashSet;

use crate::topology::face_topology::FaceTopology;
use crate::topology::id::{FaceId, NodeId};
use crate::topology::nodes::NodeStore;

/// Derive one face set per named node set in `store`. Face indices are
/// emitted in ascending discovery order; sets whose nodes span no complete
/// face come out empty but are still registered under their name.
pub fn project_node_sets(topology: &mut FaceTopology, store: &NodeStore) {
    for (name, set) in store.sets() {
        let members: HashSet<NodeId> = set.iter().copied().collect();
        let faces: Vec<FaceId> = topology
            .faces()
            .filter(|&face| {
                topology
                    .nodes(face)
                    .iter()
                    .all(|node| members.contains(node))
            })
            .collect();
        topology.face_sets.insert(name.to_string(), faces);
    }
}
