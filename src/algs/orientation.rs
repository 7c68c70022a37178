//! Canonical face-node ordering.
//!
//! After deduplication every face's node list is re-ordered so the winding
//! implies a normal pointing outward from the face's first adjacent
//! element: counterclockwise around the face center for polygons, and a
//! fixed right-hand convention for the 2-node faces of 2-D meshes. The node
//! listed first in the mesh input stays first, so consumers keep a stable
//! starting point.

use crate::geometry::vector::{self, EPS, Vec3};
use crate::mesh_error::MeshFacetError;
use crate::topology::element_source::ElementSource;
use crate::topology::face_topology::FaceTopology;
use crate::topology::id::{FaceId, NodeId};
use crate::topology::nodes::NodeStore;

/// Re-order every face's node list relative to its slot-0 element centroid.
pub fn orient_all_faces<S: ElementSource>(
    topology: &mut FaceTopology,
    source: &S,
    store: &NodeStore,
) -> Result<(), MeshFacetError> {
    let FaceTopology {
        face_nodes,
        face_elements,
        ..
    } = topology;

    for (index, nodes) in face_nodes.iter_mut().enumerate() {
        let face = FaceId::new(index);
        let element = face_elements[index]
            .primary()
            .ok_or(MeshFacetError::FaceWithoutElement(face))?;
        let center = source.element_center(element, store);
        orient_face(face, nodes, store, center)?;
    }
    Ok(())
}

fn orient_face(
    face: FaceId,
    nodes: &mut [NodeId],
    store: &NodeStore,
    element_center: Vec3,
) -> Result<(), MeshFacetError> {
    let coords: Vec<Vec3> = nodes.iter().map(|&n| store.position(n)).collect();
    let center = vector::centroid(&coords);

    if nodes.len() == 2 {
        let tangent = vector::sub(coords[1], coords[0]);
        let to_element = vector::sub(element_center, center);
        let normal = vector::cross(tangent, to_element);
        if vector::norm(normal) <= EPS {
            return Err(MeshFacetError::DegenerateFace {
                face,
                nodes: nodes.to_vec(),
                reason: "element center is collinear with the edge",
            });
        }
        // Keep the adjacent element on the right-hand side of the directed
        // edge, so the edge normal points away from it.
        if normal[2] > 0.0 {
            nodes.swap(0, 1);
        }
        return Ok(());
    }

    // Approximate outward normal and an in-plane reference frame.
    let normal = vector::sub(center, element_center);
    let axis = vector::normalize(vector::sub(coords[0], center)).ok_or_else(|| {
        MeshFacetError::DegenerateFace {
            face,
            nodes: nodes.to_vec(),
            reason: "first node coincides with the face center",
        }
    })?;
    let second_axis = vector::normalize(vector::cross(normal, axis)).ok_or_else(|| {
        MeshFacetError::DegenerateFace {
            face,
            nodes: nodes.to_vec(),
            reason: "face plane is degenerate",
        }
    })?;

    // Counterclockwise angular order around the face center.
    let mut order: Vec<(f64, NodeId)> = coords
        .iter()
        .zip(nodes.iter())
        .map(|(&p, &n)| {
            let v = vector::sub(p, center);
            (f64::atan2(vector::dot(v, second_axis), vector::dot(v, axis)), n)
        })
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0));

    // Equal angles mean coincident nodes; a valid face never produces them.
    for pair in order.windows(2) {
        if (pair[1].0 - pair[0].0).abs() <= EPS {
            return Err(MeshFacetError::DegenerateFace {
                face,
                nodes: nodes.to_vec(),
                reason: "two nodes at the same angular position",
            });
        }
    }

    // Write the sorted order back, then rotate so the originally-first node
    // leads again.
    let first = nodes[0];
    let mut start = 0;
    for (i, &(_, node)) in order.iter().enumerate() {
        nodes[i] = node;
        if node == first {
            start = i;
        }
    }
    nodes.rotate_left(start);
    Ok(())
}
