//! Face discovery and deduplication.
//!
//! Walks every element-local face in deterministic region/sub-region/
//! element/local-face order, discovers the unique geometric faces, and fills
//! the face→node, face→element, and element→face relations. Duplicate
//! detection buckets candidate faces by the lowest node index of their
//! sorted node list, so each lookup scans only the handful of faces incident
//! to that node.

use log::debug;

use crate::algs::{face_sets, orientation};
use crate::mesh_error::MeshFacetError;
use crate::topology::element_source::ElementSource;
use crate::topology::face_topology::{ElementFaceBlock, FaceElements, FaceTopology};
use crate::topology::id::{ElementRef, FaceId, NodeId};
use crate::topology::nodes::NodeStore;

/// Build the complete face topology for `source`: discover the unique
/// faces, project the named node sets onto faces, and canonically orient
/// every face's node list.
pub fn build<S: ElementSource>(
    source: &S,
    nodes: &NodeStore,
) -> Result<FaceTopology, MeshFacetError> {
    let mut topology = build_faces(source, nodes.len())?;
    face_sets::project_node_sets(&mut topology, nodes);
    orientation::orient_all_faces(&mut topology, source, nodes)?;
    Ok(topology)
}

/// Discovery pass only: relations are filled, but node lists keep their
/// as-discovered order and no face sets are derived.
pub fn build_faces<S: ElementSource>(
    source: &S,
    node_count: usize,
) -> Result<FaceTopology, MeshFacetError> {
    // The true face count is unknown until the pass ends; 2x the node count
    // is the usual upper bound for well-formed volumetric meshes.
    let upper_bound = 2 * node_count;
    let mut face_nodes: Vec<Vec<NodeId>> = Vec::with_capacity(upper_bound);
    let mut face_elements: Vec<FaceElements> = Vec::with_capacity(upper_bound);

    // Transient state, discarded once discovery completes: the sorted copy
    // of each face's node list, and the lowest-node buckets of candidate
    // face indices.
    let mut sorted_nodes: Vec<Vec<NodeId>> = Vec::with_capacity(upper_bound);
    let mut faces_by_lowest_node: Vec<Vec<FaceId>> = vec![Vec::new(); node_count];

    let mut element_faces: Vec<Vec<ElementFaceBlock>> = Vec::with_capacity(source.region_count());
    let mut scratch: Vec<NodeId> = Vec::new();

    for region in 0..source.region_count() {
        let mut region_blocks = Vec::with_capacity(source.sub_region_count(region));
        for sub_region in 0..source.sub_region_count(region) {
            let faces_per_element = source.faces_per_element(region, sub_region);
            let element_count = source.element_count(region, sub_region);
            let mut block = ElementFaceBlock {
                faces_per_element,
                faces: Vec::with_capacity(faces_per_element * element_count),
            };

            for e in 0..element_count {
                let element = ElementRef::new(region, sub_region, e);
                for local_face in 0..faces_per_element {
                    source.face_nodes(element, local_face, &mut scratch);
                    validate_face_nodes(&scratch, element, local_face)?;

                    let mut sorted = scratch.clone();
                    sorted.sort_unstable();
                    let low = sorted[0].get();

                    // grow the index when a node id exceeds the declared count
                    if low >= faces_by_lowest_node.len() {
                        faces_by_lowest_node.resize_with(low + 1, Vec::new);
                    }
                    let bucket = &mut faces_by_lowest_node[low];
                    let face = match find_duplicate(bucket, &sorted_nodes, &sorted) {
                        Some(face) => {
                            // saturated faces stay in the bucket; a third
                            // claimant is a topology error, not a new face
                            if let Err((first, second)) =
                                face_elements[face.get()].attach(element)
                            {
                                return Err(MeshFacetError::NonManifoldTopology {
                                    nodes: face_nodes[face.get()].clone(),
                                    first,
                                    second,
                                    third: element,
                                });
                            }
                            face
                        }
                        None => {
                            // New face: index allocation, both node lists,
                            // the bucket entry, and slot-0 adjacency are one
                            // atomic step against the same index.
                            let face = FaceId::new(face_nodes.len());
                            face_nodes.push(scratch.clone());
                            sorted_nodes.push(sorted);
                            face_elements.push(FaceElements::from_primary(element));
                            bucket.push(face);
                            face
                        }
                    };
                    block.faces.push(face);
                }
            }
            region_blocks.push(block);
        }
        element_faces.push(region_blocks);
    }

    // Discovery fixes the final face count; give the over-provisioned
    // relations their exact footprint.
    face_nodes.shrink_to_fit();
    face_elements.shrink_to_fit();

    let boundary = face_elements.iter().filter(|a| a.is_boundary()).count();
    debug!(
        "face build: {} faces ({} boundary, {} interior) from {} nodes",
        face_nodes.len(),
        boundary,
        face_nodes.len() - boundary,
        node_count
    );

    Ok(FaceTopology {
        face_nodes,
        face_elements,
        element_faces,
        face_sets: Default::default(),
    })
}

/// Scan one lowest-node bucket for a face with an identical sorted node
/// list. Slice equality checks length first, then elementwise.
fn find_duplicate(
    bucket: &[FaceId],
    sorted_nodes: &[Vec<NodeId>],
    sorted: &[NodeId],
) -> Option<FaceId> {
    bucket
        .iter()
        .copied()
        .find(|face| sorted_nodes[face.get()].as_slice() == sorted)
}

fn validate_face_nodes(
    nodes: &[NodeId],
    element: ElementRef,
    local_face: usize,
) -> Result<(), MeshFacetError> {
    // lists hold at most a handful of entries
    let mut distinct = 0;
    for (i, &n) in nodes.iter().enumerate() {
        if !nodes[..i].contains(&n) {
            distinct += 1;
        }
    }
    if distinct < 2 {
        return Err(MeshFacetError::MalformedFaceNodeList {
            element,
            local_face,
            reason: format!("{distinct} distinct nodes after padding removal"),
        });
    }
    Ok(())
}
